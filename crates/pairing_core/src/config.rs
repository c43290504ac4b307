//! Tuning constants for the fairness scorer

use serde::{Deserialize, Serialize};

/// Default ceiling on consecutive matches before a participant must rest
pub const DEFAULT_CONSECUTIVE_LIMIT: usize = 3;

/// Scorer weights. The defaults are the tournament's standard rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// A pairing where either participant has played this many matches in a
    /// row scores 0
    pub consecutive_limit: usize,
    /// Added to `max_wait` for participants who have never played
    pub new_participant_offset: u32,
    /// Bonus for a pairing that has never been logged
    pub never_played_bonus: u32,
    /// Penalty per participant who played in the most recent match
    pub recent_match_penalty: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            consecutive_limit: DEFAULT_CONSECUTIVE_LIMIT,
            new_participant_offset: 1,
            never_played_bonus: 2,
            recent_match_penalty: 1,
        }
    }
}
