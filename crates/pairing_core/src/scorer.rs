//! Fairness scoring and next-pairing selection

use std::cmp::Reverse;

use crate::config::SchedulerConfig;
use crate::match_log::MatchLog;
use crate::stats::{self, Aggregates};
use crate::types::Pairing;
use crate::universe::MatchupUniverse;

/// Scores candidate pairings against a fixed log snapshot.
pub struct FairnessScorer<'a> {
    log: &'a MatchLog,
    aggregates: Aggregates,
    config: &'a SchedulerConfig,
}

impl<'a> FairnessScorer<'a> {
    pub fn new(log: &'a MatchLog, aggregates: Aggregates, config: &'a SchedulerConfig) -> Self {
        Self {
            log,
            aggregates,
            config,
        }
    }

    /// Composite fairness score; higher means the pairing should play sooner.
    ///
    /// Forced to 0 when either participant has reached the consecutive limit.
    /// Otherwise the sum of both wait scores, plus how far the pair is below
    /// the most-replayed pair, plus a bonus for a fresh pairing, minus a
    /// penalty for each participant who played in the most recent match.
    pub fn score(&self, pairing: &Pairing) -> i64 {
        if self.is_forced(pairing) {
            return 0;
        }
        let (a, b) = pairing.ids();

        let offset = self.config.new_participant_offset;
        let max_wait = self.aggregates.max_wait;
        let wait = stats::wait_score(self.log, a, max_wait, offset) + stats::wait_score(self.log, b, max_wait, offset);

        let count = stats::matchup_count(self.log, pairing);
        let replay = self.aggregates.max_matchup_count as i64 - count as i64;

        let fresh = if count == 0 {
            i64::from(self.config.never_played_bonus)
        } else {
            0
        };

        let just_played = match self.log.last() {
            Some(last) => [a, b].iter().filter(|&&id| last.involves(id)).count() as i64,
            None => 0,
        };

        wait as i64 + replay + fresh - just_played * i64::from(self.config.recent_match_penalty)
    }

    /// Whether either participant has reached the consecutive limit.
    pub fn is_forced(&self, pairing: &Pairing) -> bool {
        let (a, b) = pairing.ids();
        let longest_run = stats::consecutive_run(self.log, a).max(stats::consecutive_run(self.log, b));
        longest_run >= self.config.consecutive_limit
    }

    /// Highest-scoring pairing in the universe, or `None` when it is empty.
    ///
    /// A forced pairing loses to any rested pairing with the same score.
    /// Remaining ties go to the smaller identifier sum, then the smaller low
    /// identifier, so the result is fully determined by the log and roster.
    pub fn select(&self, universe: &MatchupUniverse) -> Option<(Pairing, i64)> {
        universe
            .iter()
            .map(|pairing| (*pairing, self.score(pairing), self.is_forced(pairing)))
            .max_by_key(rank)
            .map(|(pairing, score, _)| (pairing, score))
    }
}

fn rank(candidate: &(Pairing, i64, bool)) -> (i64, bool, Reverse<u64>, Reverse<Pairing>) {
    let (pairing, score, forced) = *candidate;
    (score, !forced, Reverse(pairing.id_sum()), Reverse(pairing))
}

#[cfg(test)]
#[path = "scorer_tests.rs"]
mod scorer_tests;
