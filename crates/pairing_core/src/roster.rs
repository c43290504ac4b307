//! The set of participants currently eligible for pairing

use std::collections::HashSet;

use crate::error::{Result, SchedulerError};
use crate::types::{Participant, ParticipantId};

/// Ordered collection of eligible participants, keyed by identifier.
///
/// Participants that have not checked in are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(participants.len());
        for participant in &participants {
            if !seen.insert(participant.id) {
                return Err(SchedulerError::DuplicateParticipant(participant.id));
            }
        }

        Ok(Self {
            participants: participants.into_iter().filter(|p| p.checked_in).collect(),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.participants.iter().map(|p| p.id)
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.get(id).is_some()
    }

    /// Like [`Roster::get`] but reports a missing participant as an error
    pub fn require(&self, id: ParticipantId) -> Result<&Participant> {
        self.get(id).ok_or(SchedulerError::UnknownParticipant(id))
    }
}
