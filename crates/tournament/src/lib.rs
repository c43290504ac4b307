//! Tournament operator tooling
//!
//! This crate wraps [`pairing_core`] with everything an event needs on disk:
//! - Loading settings and the participant roster
//! - Persisting the match log (append, atomic save, reload, archive on reset)
//! - Rendering the matchup table
//! - Sharing one scheduler between several clients
//!
//! # Usage
//!
//! ```bash
//! # Who plays next?
//! cargo run -p tournament -- suggest
//!
//! # Record a 2-1 result between participants 4 and 7
//! cargo run -p tournament -- log 4 7 2 1
//! ```

mod error;
pub mod log_file;
mod report;
pub mod roster_file;
mod settings;
mod shared;

pub use error::*;
pub use report::*;
pub use settings::*;
pub use shared::*;
