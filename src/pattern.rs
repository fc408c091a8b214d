use crate::error::{GpaintError, Result};
use std::path::Path;

/// A contribution calendar has 7 weekday rows; anything taller would alias
/// days across week columns in the date mapping.
pub const MAX_ROWS: usize = 7;

/// The builtin 5x25 bitmap painted when no pattern file is given.
const BUILTIN: &[&str] = &[
    "1111001110010010111101001",
    "1000010010110100001001010",
    "1111011110101000010000100",
    "0001010010100100100001010",
    "1111010010100101111010010",
];

/// Fixed binary grid of calendar cells. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Pattern {
    rows: Vec<Vec<bool>>,
}

impl Pattern {
    pub fn builtin() -> Self {
        let rows = BUILTIN
            .iter()
            .map(|line| line.chars().map(|ch| ch == '1').collect())
            .collect();
        Self { rows }
    }

    /// Parse a pattern from text: one line per row, `1` or `#` for an
    /// active cell, `0` or `.` for an inactive one. Blank lines are
    /// skipped; all rows must have the same width.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut rows = Vec::new();

        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            let mut row = Vec::with_capacity(line.len());
            for ch in line.chars() {
                match ch {
                    '1' | '#' => row.push(true),
                    '0' | '.' => row.push(false),
                    other => {
                        return Err(GpaintError::Parse(format!(
                            "Invalid pattern character '{other}' on line {}",
                            lineno + 1
                        )));
                    }
                }
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(GpaintError::Pattern("Pattern has no rows".to_string()));
        }

        if rows.len() > MAX_ROWS {
            return Err(GpaintError::Pattern(format!(
                "Pattern has {} rows, but a calendar column holds at most {MAX_ROWS} days",
                rows.len()
            )));
        }

        let width = rows[0].len();
        if let Some(bad) = rows.iter().position(|r| r.len() != width) {
            return Err(GpaintError::Pattern(format!(
                "Row {} has {} cells, expected {width}",
                bad + 1,
                rows[bad].len()
            )));
        }

        Ok(Self { rows })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    pub fn is_active(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    /// Active cells in row-major order: row ascending, then column
    /// ascending. Quota distribution depends on this order.
    pub fn active_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (row, cols) in self.rows.iter().enumerate() {
            for (col, &active) in cols.iter().enumerate() {
                if active {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    pub fn active_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&c| c).count()
    }
}
