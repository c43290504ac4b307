//! Error type shared by every scheduler operation

use thiserror::Error;

use crate::types::ParticipantId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// A match or pairing was built from the same participant twice
    #[error("2 identical participants were given: {0} & {0}")]
    InvalidMatch(ParticipantId),

    #[error("invalid score {score}: must not exceed {games_to_win} games to win")]
    InvalidScore { score: u32, games_to_win: u32 },

    #[error("invalid match format: best of {0} must be a positive odd number")]
    InvalidFormat(u32),

    #[error("match log line {line}: {reason}")]
    LogParse { line: usize, reason: String },

    #[error("unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    #[error("duplicate participant identifier in roster: {0}")]
    DuplicateParticipant(ParticipantId),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
