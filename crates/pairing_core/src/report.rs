//! Display-only matchup matrix, rebuilt on demand

use serde::Serialize;

use crate::types::{ParticipantId, Wait};

/// Square matrix over the roster: replay count and current score per pair,
/// plus each participant's wait interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub id: ParticipantId,
    /// `"<id>: <name>"`
    pub label: String,
    pub wait: Wait,
    /// One cell per roster participant in row order; `None` on the diagonal
    pub cells: Vec<Option<ReportCell>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportCell {
    pub matchup_count: usize,
    pub score: i64,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: ParticipantId, column: ParticipantId) -> Option<ReportCell> {
        let column = self.rows.iter().position(|r| r.id == column)?;
        self.rows.iter().find(|r| r.id == row)?.cells[column]
    }
}
