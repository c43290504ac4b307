//! All candidate pairings derivable from a roster

use std::collections::BTreeSet;

use crate::roster::Roster;
use crate::types::Pairing;

/// Every unordered pair of distinct roster participants.
///
/// Always rebuilt wholesale from a roster; iteration order is the canonical
/// pairing order, independent of roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchupUniverse {
    pairings: BTreeSet<Pairing>,
}

impl MatchupUniverse {
    pub fn build(roster: &Roster) -> Self {
        let ids: Vec<_> = roster.ids().collect();
        let mut pairings = BTreeSet::new();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                // Roster ids are unique, so every pair here is distinct
                if let Ok(pairing) = Pairing::new(a, b) {
                    pairings.insert(pairing);
                }
            }
        }
        Self { pairings }
    }

    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    pub fn contains(&self, pairing: &Pairing) -> bool {
        self.pairings.contains(pairing)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pairing> {
        self.pairings.iter()
    }
}
