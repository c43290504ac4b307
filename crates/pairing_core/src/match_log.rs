//! Append-only history of completed matches

use crate::types::Match;

/// Matches in the order they were logged, most recent last.
///
/// Log order, not timestamp order, defines "most recent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchLog {
    matches: Vec<Match>,
}

impl MatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_matches(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    pub fn push(&mut self, m: Match) {
        self.matches.push(m);
    }

    pub fn clear(&mut self) {
        self.matches.clear();
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn last(&self) -> Option<&Match> {
        self.matches.last()
    }

    pub fn as_slice(&self) -> &[Match] {
        &self.matches
    }

    /// Oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Match> + ExactSizeIterator {
        self.matches.iter()
    }

    /// Most recent first
    pub fn iter_recent(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().rev()
    }
}
