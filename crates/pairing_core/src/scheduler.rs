//! Tournament session: roster, history and the derived state kept in step
//! with them.

use std::collections::BTreeMap;

use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::match_log::MatchLog;
use crate::report::{Report, ReportCell, ReportRow};
use crate::roster::Roster;
use crate::scorer::FairnessScorer;
use crate::serializer;
use crate::stats::{self, Aggregates};
use crate::types::{Match, Pairing, Participant, ParticipantId, Wait};
use crate::universe::MatchupUniverse;

/// Owns one tournament's roster and match log and answers "who plays next".
///
/// Every mutation rebuilds the aggregates before returning, so queries always
/// see a consistent snapshot. Each instance is independent; callers own it
/// and pass it where it is needed.
#[derive(Debug, Clone)]
pub struct Scheduler {
    config: SchedulerConfig,
    roster: Roster,
    universe: MatchupUniverse,
    log: MatchLog,
    aggregates: Aggregates,
    /// Every participant seen in any roster this session, for labelling
    /// history that mentions people who have since left
    directory: BTreeMap<ParticipantId, Participant>,
}

impl Scheduler {
    pub fn new(roster: Roster) -> Self {
        Self::with_config(roster, SchedulerConfig::default())
    }

    pub fn with_config(roster: Roster, config: SchedulerConfig) -> Self {
        let mut scheduler = Self {
            config,
            roster: Roster::empty(),
            universe: MatchupUniverse::default(),
            log: MatchLog::new(),
            aggregates: Aggregates::default(),
            directory: BTreeMap::new(),
        };
        scheduler.replace_roster(roster);
        scheduler
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn universe(&self) -> &MatchupUniverse {
        &self.universe
    }

    pub fn log(&self) -> &MatchLog {
        &self.log
    }

    pub fn max_wait(&self) -> usize {
        self.aggregates.max_wait
    }

    pub fn max_matchup_count(&self) -> usize {
        self.aggregates.max_matchup_count
    }

    /// Any participant seen this session, including ones no longer in the roster
    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.directory.get(&id)
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Swap in a new roster and rebuild the matchup universe.
    ///
    /// The match log is left alone: history involving removed participants
    /// still counts in their statistics, but no pairing with them can be
    /// suggested.
    pub fn replace_roster(&mut self, roster: Roster) {
        for participant in roster.iter() {
            self.directory.insert(participant.id, participant.clone());
        }
        self.universe = MatchupUniverse::build(&roster);
        self.roster = roster;
        tracing::debug!(
            participants = self.roster.len(),
            pairings = self.universe.len(),
            "roster replaced"
        );
        self.recompute();
    }

    /// Log a match between two roster participants, stamped now.
    pub fn log_match(
        &mut self,
        player1: ParticipantId,
        player2: ParticipantId,
        score1: u32,
        score2: u32,
    ) -> Result<Match> {
        let m = Match::now(player1, player2, score1, score2)?;
        self.roster.require(player1)?;
        self.roster.require(player2)?;
        self.record(m.clone());
        Ok(m)
    }

    /// Append an already-built match without roster checks.
    pub fn record(&mut self, m: Match) {
        tracing::info!(
            player1 = %m.player1(),
            player2 = %m.player2(),
            score = ?m.scores(),
            "match logged"
        );
        self.log.push(m);
        self.recompute();
    }

    pub fn replace_log(&mut self, matches: Vec<Match>) {
        self.log = MatchLog::from_matches(matches);
        tracing::info!(matches = self.log.len(), "match log replaced");
        self.recompute();
    }

    pub fn reset_log(&mut self) {
        self.log.clear();
        tracing::info!("match log reset");
        self.recompute();
    }

    fn recompute(&mut self) {
        self.aggregates = Aggregates::compute(&self.roster, &self.universe, &self.log);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    fn scorer(&self) -> FairnessScorer<'_> {
        FairnessScorer::new(&self.log, self.aggregates, &self.config)
    }

    /// The fairest next pairing, or `None` if fewer than two participants
    /// are eligible.
    pub fn suggest(&self) -> Option<Pairing> {
        self.suggest_scored().map(|(pairing, _)| pairing)
    }

    /// Like [`Scheduler::suggest`], with the winning score
    pub fn suggest_scored(&self) -> Option<(Pairing, i64)> {
        let selected = self.scorer().select(&self.universe);
        match selected {
            Some((pairing, score)) => tracing::info!(%pairing, score, "suggested pairing"),
            None => tracing::info!("no pairing available"),
        }
        selected
    }

    pub fn wait_interval(&self, id: ParticipantId) -> Result<Wait> {
        self.roster.require(id)?;
        Ok(stats::wait_interval(&self.log, id))
    }

    pub fn wait_score(&self, id: ParticipantId) -> Result<u64> {
        self.roster.require(id)?;
        Ok(stats::wait_score(
            &self.log,
            id,
            self.aggregates.max_wait,
            self.config.new_participant_offset,
        ))
    }

    pub fn consecutive_run(&self, id: ParticipantId) -> Result<usize> {
        self.roster.require(id)?;
        Ok(stats::consecutive_run(&self.log, id))
    }

    /// Times this pair has met, in either order. Counts history for
    /// participants who have left the roster too.
    pub fn matchup_count(&self, a: ParticipantId, b: ParticipantId) -> Result<usize> {
        let pairing = Pairing::new(a, b)?;
        Ok(stats::matchup_count(&self.log, &pairing))
    }

    /// Current fairness score of a pairing between two roster participants
    pub fn score(&self, a: ParticipantId, b: ParticipantId) -> Result<i64> {
        let pairing = Pairing::new(a, b)?;
        self.roster.require(a)?;
        self.roster.require(b)?;
        Ok(self.scorer().score(&pairing))
    }

    pub fn generate_report(&self) -> Report {
        let scorer = self.scorer();
        let rows = self
            .roster
            .iter()
            .map(|row| ReportRow {
                id: row.id,
                label: row.short_label(),
                wait: stats::wait_interval(&self.log, row.id),
                cells: self
                    .roster
                    .iter()
                    .map(|column| {
                        let pairing = Pairing::new(row.id, column.id).ok()?;
                        Some(ReportCell {
                            matchup_count: stats::matchup_count(&self.log, &pairing),
                            score: scorer.score(&pairing),
                        })
                    })
                    .collect(),
            })
            .collect();
        Report { rows }
    }

    // ------------------------------------------------------------------
    // Text form of the log
    // ------------------------------------------------------------------

    pub fn format_match(&self, m: &Match) -> Result<String> {
        serializer::format_match(m, |id| self.directory.get(&id))
    }

    pub fn to_log_text(&self) -> Result<String> {
        serializer::format_log(self.log.iter(), |id| self.directory.get(&id))
    }

    /// Replace the log with the parsed contents of `text`.
    ///
    /// Labels resolve against the current roster. If any line fails, the
    /// existing log is kept as it was.
    pub fn load_log_text(&mut self, text: &str) -> Result<usize> {
        let matches = match serializer::parse_log(text, &self.roster) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(error = %e, "match log reload rejected");
                return Err(e);
            }
        };
        let count = matches.len();
        self.replace_log(matches);
        Ok(count)
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
