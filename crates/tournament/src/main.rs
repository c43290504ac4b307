//! Tournament CLI
//!
//! Suggest the next pairing, log results, and inspect the matchup table.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use pairing_core::{Pairing, ParticipantId, Scheduler};
use rand::Rng;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use tournament::{log_file, print_report, roster_file, TournamentSettings};

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load roster and existing match history into a fresh scheduler
fn open_session(settings: &TournamentSettings) -> Result<Scheduler> {
    let roster = roster_file::load_roster(&settings.roster)
        .with_context(|| format!("failed to load roster {}", settings.roster.display()))?;
    let mut scheduler = Scheduler::with_config(roster, settings.scheduler);
    log_file::load_log_if_present(&settings.match_log, &mut scheduler)
        .with_context(|| format!("failed to load match log {}", settings.match_log.display()))?;
    Ok(scheduler)
}

fn pairing_labels(scheduler: &Scheduler, pairing: Pairing) -> (String, String) {
    let label = |id: ParticipantId| {
        scheduler
            .participant(id)
            .map(|p| p.label())
            .unwrap_or_else(|| id.to_string())
    };
    (label(pairing.low()), label(pairing.high()))
}

fn show_roster(scheduler: &Scheduler) {
    println!("=== Roster ({} eligible) ===", scheduler.roster().len());
    for participant in scheduler.roster().iter() {
        println!("{}", participant.label());
    }
}

fn suggest(scheduler: &Scheduler) {
    match scheduler.suggest_scored() {
        Some((pairing, score)) => {
            let (p1, p2) = pairing_labels(scheduler, pairing);
            println!("Next match: {} vs. {} (score {})", p1, p2, score);
        }
        None => println!("No pairing available: fewer than two eligible participants."),
    }
}

fn log_result(
    settings: &TournamentSettings,
    scheduler: &mut Scheduler,
    player1: u32,
    player2: u32,
    score1: u32,
    score2: u32,
) -> Result<()> {
    settings.best_of.validate_scores(score1, score2)?;
    let m = scheduler.log_match(ParticipantId(player1), ParticipantId(player2), score1, score2)?;
    log_file::append_match(&settings.match_log, scheduler, &m)?;
    println!("{}", scheduler.format_match(&m)?);
    Ok(())
}

fn report(scheduler: &Scheduler, json: bool) -> Result<()> {
    let report = scheduler.generate_report();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn reset(settings: &TournamentSettings, scheduler: &mut Scheduler) -> Result<()> {
    match log_file::backup_and_reset(&settings.match_log, scheduler)? {
        Some(backup) => println!("Match log archived to {}", backup.display()),
        None => println!("No match log to archive."),
    }
    Ok(())
}

fn simulate(settings: &TournamentSettings, mut scheduler: Scheduler, rounds: usize) -> Result<()> {
    let games_to_win = settings.best_of.games_to_win();
    let mut rng = rand::thread_rng();

    println!("=== Simulation: {} rounds, {} ===", rounds, settings.best_of);
    for round in 1..=rounds {
        let Some(pairing) = scheduler.suggest() else {
            println!("No pairing available.");
            break;
        };
        let loser_games = rng.gen_range(0..games_to_win);
        let (score1, score2) = if rng.gen_bool(0.5) {
            (games_to_win, loser_games)
        } else {
            (loser_games, games_to_win)
        };
        let (a, b) = pairing.ids();
        scheduler.log_match(a, b, score1, score2)?;

        let (p1, p2) = pairing_labels(&scheduler, pairing);
        println!("Round {:>3}: {} vs. {}, {}-{}", round, p1, p2, score1, score2);
    }

    println!();
    print_report(&scheduler.generate_report());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let settings = TournamentSettings::load(&cli.settings)
        .with_context(|| format!("failed to load settings {}", cli.settings.display()))?;
    let mut scheduler = open_session(&settings)?;

    match cli.command {
        Command::Roster => show_roster(&scheduler),
        Command::Suggest => suggest(&scheduler),
        Command::Log {
            player1,
            player2,
            score1,
            score2,
        } => log_result(&settings, &mut scheduler, player1, player2, score1, score2)?,
        Command::Report { json } => report(&scheduler, json)?,
        Command::Reset => reset(&settings, &mut scheduler)?,
        Command::Simulate { rounds } => simulate(&settings, scheduler, rounds)?,
    }

    Ok(())
}
