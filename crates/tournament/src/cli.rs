use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tournament", version, about = "Suggest fair pairings and keep the match log")]
pub struct Cli {
    /// Settings file
    #[arg(short, long, value_name = "FILE", default_value = "tournament.toml")]
    pub settings: PathBuf,

    #[arg(
        short,
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List eligible participants
    Roster,
    /// Suggest the next pairing
    Suggest,
    /// Log a completed match and append it to the match log
    Log {
        player1: u32,
        player2: u32,
        score1: u32,
        score2: u32,
    },
    /// Show wait intervals and the matchup table
    Report {
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Archive the match log file and start a fresh one
    Reset,
    /// Dry-run suggest/log cycles with random scores; nothing is saved
    Simulate {
        #[arg(long, default_value_t = 20)]
        rounds: usize,
    },
}
