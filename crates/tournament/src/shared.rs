//! Single-writer access to a scheduler shared between clients

use pairing_core::{Match, Pairing, ParticipantId, Report, Roster, Scheduler, SchedulerError};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle to one tournament's scheduler.
///
/// Mutations hold the write lock for their whole duration, aggregate
/// recomputation included; suggestions and other queries share the read lock.
#[derive(Debug, Clone)]
pub struct SharedScheduler {
    inner: Arc<RwLock<Scheduler>>,
}

impl SharedScheduler {
    pub fn new(scheduler: Scheduler) -> Self {
        Self {
            inner: Arc::new(RwLock::new(scheduler)),
        }
    }

    // A panic can't leave the scheduler half-updated: every mutation finishes
    // its recompute before returning, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Scheduler> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Scheduler> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn suggest(&self) -> Option<Pairing> {
        self.read().suggest()
    }

    pub fn generate_report(&self) -> Report {
        self.read().generate_report()
    }

    /// Run a read-only query against a consistent snapshot
    pub fn with<R>(&self, f: impl FnOnce(&Scheduler) -> R) -> R {
        f(&self.read())
    }

    pub fn log_match(
        &self,
        player1: ParticipantId,
        player2: ParticipantId,
        score1: u32,
        score2: u32,
    ) -> Result<Match, SchedulerError> {
        self.write().log_match(player1, player2, score1, score2)
    }

    pub fn replace_roster(&self, roster: Roster) {
        self.write().replace_roster(roster);
    }

    pub fn replace_log(&self, matches: Vec<Match>) {
        self.write().replace_log(matches);
    }

    pub fn reset_log(&self) {
        self.write().reset_log();
    }

    pub fn load_log_text(&self, text: &str) -> Result<usize, SchedulerError> {
        self.write().load_log_text(text)
    }
}
