//! Fair pairing scheduler for tournaments
//!
//! Given a roster of participants and the history of matches already played,
//! this crate picks the "fairest" next pairing:
//! - participants who have waited longest (or never played) go first
//! - pairs that have met less often are preferred
//! - nobody plays more than a configured number of matches in a row
//!
//! # Usage
//!
//! ```rust
//! use pairing_core::{Participant, Roster, Scheduler};
//!
//! let roster = Roster::new(vec![
//!     Participant::new(1, "Yossy"),
//!     Participant::new(2, "Raven"),
//!     Participant::new(3, "Walter"),
//! ])
//! .unwrap();
//! let mut scheduler = Scheduler::new(roster);
//!
//! let next = scheduler.suggest().unwrap();
//! let (a, b) = next.ids();
//! scheduler.log_match(a, b, 2, 1).unwrap();
//! assert_ne!(scheduler.suggest(), Some(next));
//! ```

mod config;
mod error;
mod match_log;
mod report;
mod roster;
mod scheduler;
mod scorer;
pub mod serializer;
pub mod stats;
mod types;
mod universe;

pub use config::*;
pub use error::*;
pub use match_log::*;
pub use report::*;
pub use roster::*;
pub use scheduler::*;
pub use scorer::*;
pub use types::*;
pub use universe::*;
