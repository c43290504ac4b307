//! Roster file loading
//!
//! ```toml
//! [[participant]]
//! id = 1
//! name = "ヨッシー"
//! secondary_name = "Yossy"
//! region = "JP"
//! comment = "Light reverse-joint build"
//!
//! [[participant]]
//! id = 2
//! name = "Raven"
//! checked_in = false
//! ```

use pairing_core::{Participant, Roster};
use serde::Deserialize;
use std::path::Path;

use crate::error::{Result, TournamentError};

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default, rename = "participant")]
    participants: Vec<Participant>,
}

/// Parse roster TOML. Participants who have not checked in are dropped.
pub fn parse_roster(contents: &str, path: &Path) -> Result<Roster> {
    let file: RosterFile = toml::from_str(contents).map_err(|source| TournamentError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Roster::new(file.participants)?)
}

pub fn load_roster(path: &Path) -> Result<Roster> {
    let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
    let roster = parse_roster(&contents, path)?;
    tracing::info!(path = %path.display(), participants = roster.len(), "roster loaded");
    Ok(roster)
}
