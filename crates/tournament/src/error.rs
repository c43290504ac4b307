use std::path::PathBuf;

use pairing_core::SchedulerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl TournamentError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TournamentError>;
