//! Core value types: participants, pairings and logged matches.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SchedulerError};

/// Stable identifier of a tournament entrant. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub u32);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tournament entrant as supplied by the roster source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Alternate spelling shown after a slash, e.g. a romanized name
    #[serde(default)]
    pub secondary_name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Free text shown on the player card; not used for scheduling
    #[serde(default)]
    pub comment: Option<String>,
    /// Only checked-in participants are eligible for pairing
    #[serde(default = "default_checked_in")]
    pub checked_in: bool,
}

fn default_checked_in() -> bool {
    true
}

impl Participant {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id: ParticipantId(id),
            name: name.to_string(),
            secondary_name: None,
            region: None,
            comment: None,
            checked_in: true,
        }
    }

    pub fn with_secondary_name(mut self, secondary_name: &str) -> Self {
        self.secondary_name = Some(secondary_name.to_string());
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Full label used in the match log: `"<id>: <name>[/<secondary>][ @<region>]"`.
    ///
    /// The secondary name is only shown when it is non-blank and differs from
    /// the primary name.
    pub fn label(&self) -> String {
        let mut label = self.short_label();
        if let Some(secondary) = self.secondary_name.as_deref() {
            if secondary != self.name && !secondary.trim().is_empty() {
                label.push('/');
                label.push_str(secondary);
            }
        }
        if let Some(region) = self.region.as_deref() {
            if !region.trim().is_empty() {
                label.push_str(" @");
                label.push_str(region);
            }
        }
        label
    }

    /// `"<id>: <name>"`, used as report row/column headers
    pub fn short_label(&self) -> String {
        format!("{}: {}", self.id, self.name)
    }
}

/// An unordered pair of two distinct participants.
///
/// Stored in canonical order (`low < high`) so `{3,7}` and `{7,3}` compare,
/// hash and sort identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Pairing {
    low: ParticipantId,
    high: ParticipantId,
}

impl Pairing {
    pub fn new(a: ParticipantId, b: ParticipantId) -> Result<Self> {
        if a == b {
            return Err(SchedulerError::InvalidMatch(a));
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { low, high })
    }

    pub fn low(&self) -> ParticipantId {
        self.low
    }

    pub fn high(&self) -> ParticipantId {
        self.high
    }

    pub fn ids(&self) -> (ParticipantId, ParticipantId) {
        (self.low, self.high)
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.low == id || self.high == id
    }

    /// Sum of both identifiers; lower sums win score ties.
    pub fn id_sum(&self) -> u64 {
        u64::from(self.low.0) + u64::from(self.high.0)
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.low, self.high)
    }
}

/// One completed match as recorded in the log.
///
/// Player order is kept as entered so the log line reads the way the
/// operator logged it; scheduling only looks at the canonical [`Pairing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    player1: ParticipantId,
    player2: ParticipantId,
    pairing: Pairing,
    score1: u32,
    score2: u32,
    timestamp: NaiveDateTime,
}

impl Match {
    /// Build a match, truncating the timestamp to whole seconds.
    pub fn new(
        player1: ParticipantId,
        player2: ParticipantId,
        score1: u32,
        score2: u32,
        timestamp: NaiveDateTime,
    ) -> Result<Self> {
        let pairing = Pairing::new(player1, player2)?;
        Ok(Self {
            player1,
            player2,
            pairing,
            score1,
            score2,
            timestamp: truncate_to_seconds(timestamp),
        })
    }

    /// Build a match stamped with the current local time.
    pub fn now(player1: ParticipantId, player2: ParticipantId, score1: u32, score2: u32) -> Result<Self> {
        Self::new(player1, player2, score1, score2, Local::now().naive_local())
    }

    pub fn player1(&self) -> ParticipantId {
        self.player1
    }

    pub fn player2(&self) -> ParticipantId {
        self.player2
    }

    pub fn pairing(&self) -> Pairing {
        self.pairing
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.score1, self.score2)
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn involves(&self, id: ParticipantId) -> bool {
        self.pairing.contains(id)
    }
}

fn truncate_to_seconds(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}

/// How long a participant has been waiting since their last match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Wait {
    /// Number of matches logged after the participant's most recent one
    Played(usize),
    /// The participant appears in no logged match
    NeverPlayed,
}

impl Wait {
    pub fn played(&self) -> Option<usize> {
        match self {
            Wait::Played(n) => Some(*n),
            Wait::NeverPlayed => None,
        }
    }
}

impl fmt::Display for Wait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wait::Played(n) => write!(f, "{}", n),
            Wait::NeverPlayed => write!(f, "--"),
        }
    }
}

/// Best-of-N match format used to bound entered scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MatchFormat {
    best_of: u32,
}

impl MatchFormat {
    pub fn best_of(games: u32) -> Result<Self> {
        if games == 0 || games % 2 == 0 {
            return Err(SchedulerError::InvalidFormat(games));
        }
        Ok(Self { best_of: games })
    }

    pub fn games(&self) -> u32 {
        self.best_of
    }

    /// Number of games a player must take to win the match
    pub fn games_to_win(&self) -> u32 {
        (self.best_of + 1) / 2
    }

    pub fn validate_scores(&self, score1: u32, score2: u32) -> Result<()> {
        let games_to_win = self.games_to_win();
        for score in [score1, score2] {
            if score > games_to_win {
                return Err(SchedulerError::InvalidScore { score, games_to_win });
            }
        }
        Ok(())
    }
}

impl Default for MatchFormat {
    fn default() -> Self {
        Self { best_of: 3 }
    }
}

impl TryFrom<u32> for MatchFormat {
    type Error = SchedulerError;

    fn try_from(games: u32) -> Result<Self> {
        Self::best_of(games)
    }
}

impl From<MatchFormat> for u32 {
    fn from(format: MatchFormat) -> u32 {
        format.best_of
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Best Of {}", self.best_of)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
