use crate::error::{GpaintError, Result};
use crate::model::{CellPlan, PaintPlan};
use crate::pattern::Pattern;
use chrono::{DateTime, Duration, Utc};

/// Distribute `budget` commits over the active cells of `pattern`.
///
/// Every active cell gets `budget / active` commits; the remainder goes to
/// the first `budget % active` cells in row-major order, one extra each,
/// so the quotas always sum to exactly `budget`.
pub fn build_plan(pattern: &Pattern, anchor: DateTime<Utc>, budget: u32) -> Result<PaintPlan> {
    let active = pattern.active_cells();
    if active.is_empty() {
        return Err(GpaintError::Pattern(
            "Pattern has no active cells, nothing to paint".to_string(),
        ));
    }

    let count = active.len() as u32;
    let base_quota = budget / count;
    let remainder = budget - base_quota * count;

    let cells = active
        .into_iter()
        .enumerate()
        .map(|(index, (row, col))| CellPlan {
            row,
            col,
            date: cell_date(anchor, row, col),
            quota: if (index as u32) < remainder {
                base_quota + 1
            } else {
                base_quota
            },
        })
        .collect();

    Ok(PaintPlan {
        anchor,
        budget,
        base_quota,
        remainder,
        cells,
    })
}

/// Calendar date for a cell: one week per column, one day per row.
pub fn cell_date(anchor: DateTime<Utc>, row: usize, col: usize) -> DateTime<Utc> {
    anchor + Duration::weeks(col as i64) + Duration::days(row as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn quotas_sum_to_budget() {
        let patterns = ["1", "101\n010", "1111111", "111\n111\n111"];
        for text in patterns {
            let pattern = Pattern::from_text(text).unwrap();
            for budget in [1, 7, 9, 10, 58, 1000] {
                let plan = build_plan(&pattern, anchor(), budget).unwrap();
                let total: u32 = plan.cells.iter().map(|c| c.quota).sum();
                assert_eq!(total, budget, "pattern {text:?} budget {budget}");
            }
        }
    }

    #[test]
    fn remainder_goes_to_first_cells_in_row_major_order() {
        // 3 active cells, budget 10: first cell gets the extra commit.
        let pattern = Pattern::from_text("101\n010").unwrap();
        let plan = build_plan(&pattern, anchor(), 10).unwrap();

        let quotas: Vec<u32> = plan.cells.iter().map(|c| c.quota).collect();
        assert_eq!(quotas, vec![4, 3, 3]);

        let cells: Vec<(usize, usize)> = plan.cells.iter().map(|c| (c.row, c.col)).collect();
        assert_eq!(cells, vec![(0, 0), (0, 2), (1, 1)]);
    }

    #[test]
    fn extra_quota_count_equals_budget_mod_active() {
        let pattern = Pattern::builtin();
        let plan = build_plan(&pattern, anchor(), 1000).unwrap();
        let active = plan.active_cells() as u32;

        let extras: Vec<usize> = plan
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.quota == plan.base_quota + 1)
            .map(|(i, _)| i)
            .collect();

        assert_eq!(extras.len() as u32, 1000 % active);
        // ... and they are exactly the leading cells.
        assert_eq!(extras, (0..extras.len()).collect::<Vec<_>>());
    }

    #[test]
    fn even_split_has_no_remainder() {
        let pattern = Pattern::from_text("111\n111\n111").unwrap();
        let plan = build_plan(&pattern, anchor(), 9).unwrap();
        assert_eq!(plan.remainder, 0);
        assert!(plan.cells.iter().all(|c| c.quota == 1));
    }

    #[test]
    fn dates_follow_week_and_day_offsets() {
        let pattern = Pattern::from_text("11\n01").unwrap();
        let plan = build_plan(&pattern, anchor(), 3).unwrap();

        let expected = [
            anchor(),
            anchor() + Duration::weeks(1),
            anchor() + Duration::weeks(1) + Duration::days(1),
        ];
        for (cell, want) in plan.cells.iter().zip(expected) {
            assert_eq!(cell.date, want, "cell ({}, {})", cell.row, cell.col);
        }

        // Recomputing yields the same instants, no drift.
        let again = build_plan(&pattern, anchor(), 3).unwrap();
        for (a, b) in plan.cells.iter().zip(again.cells.iter()) {
            assert_eq!(a.date, b.date);
        }
    }

    #[test]
    fn zero_active_cells_is_a_configuration_error() {
        let pattern = Pattern::from_text("000\n000").unwrap();
        let err = build_plan(&pattern, anchor(), 100).unwrap_err();
        assert!(matches!(err, GpaintError::Pattern(_)));
    }

    #[test]
    fn date_span_covers_first_and_last_active_cell() {
        let pattern = Pattern::from_text("10\n01").unwrap();
        let plan = build_plan(&pattern, anchor(), 2).unwrap();
        let (first, last) = plan.date_span().unwrap();
        assert_eq!(first, anchor());
        assert_eq!(last, anchor() + Duration::weeks(1) + Duration::days(1));
    }
}
