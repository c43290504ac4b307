//! Tournament settings file

use pairing_core::{MatchFormat, SchedulerConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TournamentError};

/// Settings read from `tournament.toml`.
///
/// ```toml
/// roster = "main/roster.toml"
/// match_log = "main/matchlog.txt"
/// best_of = 3
///
/// [scheduler]
/// consecutive_limit = 3
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentSettings {
    /// Roster file with the participant list
    pub roster: PathBuf,
    /// Match log, one line per completed match
    pub match_log: PathBuf,
    /// Match format used to validate entered scores
    pub best_of: MatchFormat,
    pub scheduler: SchedulerConfig,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            roster: PathBuf::from("main").join("roster.toml"),
            match_log: PathBuf::from("main").join("matchlog.txt"),
            best_of: MatchFormat::default(),
            scheduler: SchedulerConfig::default(),
        }
    }
}

impl TournamentSettings {
    /// Load settings, falling back to defaults when the file does not exist.
    ///
    /// Relative paths inside the file are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(TournamentError::io(path, e)),
        };
        let mut settings: Self = toml::from_str(&contents).map_err(|source| TournamentError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            settings.roster = base.join(&settings.roster);
            settings.match_log = base.join(&settings.match_log);
        }
        Ok(settings)
    }
}
