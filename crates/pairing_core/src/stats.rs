//! Statistics derived from the match log
//!
//! These work on any participant identifier, including ones that have since
//! left the roster; roster scoping happens in [`crate::Scheduler`].

use crate::match_log::MatchLog;
use crate::roster::Roster;
use crate::types::{Pairing, ParticipantId, Wait};
use crate::universe::MatchupUniverse;

/// Number of matches logged after the participant's most recent appearance.
pub fn wait_interval(log: &MatchLog, id: ParticipantId) -> Wait {
    match log.iter_recent().position(|m| m.involves(id)) {
        Some(n) => Wait::Played(n),
        None => Wait::NeverPlayed,
    }
}

/// Wait interval resolved to a number: participants who never played get
/// `max_wait + new_participant_offset`.
///
/// This is the only place [`Wait::NeverPlayed`] becomes arithmetic.
pub fn wait_score(log: &MatchLog, id: ParticipantId, max_wait: usize, new_participant_offset: u32) -> u64 {
    match wait_interval(log, id) {
        Wait::Played(n) => n as u64,
        Wait::NeverPlayed => max_wait as u64 + u64::from(new_participant_offset),
    }
}

/// Number of logged matches between exactly this pair, in either order.
pub fn matchup_count(log: &MatchLog, pairing: &Pairing) -> usize {
    log.iter().filter(|m| m.pairing() == *pairing).count()
}

/// Length of the unbroken run of most recent matches the participant played in.
pub fn consecutive_run(log: &MatchLog, id: ParticipantId) -> usize {
    log.iter_recent().take_while(|m| m.involves(id)).count()
}

/// Normalization scalars, recomputed in full after every mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aggregates {
    /// Largest finite wait among roster participants; 0 if nobody has played
    pub max_wait: usize,
    /// Largest replay count over the matchup universe; 0 if none
    pub max_matchup_count: usize,
}

impl Aggregates {
    pub fn compute(roster: &Roster, universe: &MatchupUniverse, log: &MatchLog) -> Self {
        let max_wait = roster
            .ids()
            .filter_map(|id| wait_interval(log, id).played())
            .max()
            .unwrap_or(0);
        let max_matchup_count = universe
            .iter()
            .map(|pairing| matchup_count(log, pairing))
            .max()
            .unwrap_or(0);

        tracing::debug!(max_wait, max_matchup_count, "recomputed aggregates");
        Self {
            max_wait,
            max_matchup_count,
        }
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
