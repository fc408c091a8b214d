use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// One active cell of the pattern with its computed date and commit quota.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellPlan {
    pub row: usize,
    pub col: usize,
    pub date: DateTime<Utc>,
    pub quota: u32,
}

/// The full allocation: every active cell in row-major order.
///
/// Invariant: the quotas of `cells` sum to exactly `budget`.
#[derive(Debug, Clone)]
pub struct PaintPlan {
    pub anchor: DateTime<Utc>,
    pub budget: u32,
    pub base_quota: u32,
    pub remainder: u32,
    pub cells: Vec<CellPlan>,
}

impl PaintPlan {
    pub fn active_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn date_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.cells.iter().map(|c| c.date).min()?;
        let last = self.cells.iter().map(|c| c.date).max()?;
        Some((first, last))
    }
}

/// Contents of the scratch artifact committed on every step.
///
/// Never read back; it exists so each commit has a changed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScratchRecord {
    pub date: String,
    pub commit: ScratchCommit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScratchCommit {
    pub message: String,
    pub author: String,
    pub branch: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintReport {
    pub commits_created: u32,
    pub cells_completed: usize,
    pub pushes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub budget: u32,
    pub rows: usize,
    pub cols: usize,
    pub active_cells: usize,
    pub base_quota: u32,
    pub remainder: u32,
    pub anchor: DateTime<Utc>,
    pub cells: Vec<CellPlan>,
}
