use crate::cli::CommonArgs;
use crate::model::{PaintPlan, PreviewOutput, SCHEMA_VERSION};
use crate::pattern::Pattern;
use crate::plan;
use anyhow::Context;
use chrono::Utc;
use console::style;

/// Render the pattern and the computed allocation without touching any
/// repository.
pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let pattern = common.load_pattern().context("Failed to load pattern")?;
    let anchor = common.resolve_anchor().context("Failed to resolve anchor date")?;
    let plan = plan::build_plan(&pattern, anchor, common.budget)
        .context("Failed to allocate commits over the pattern")?;

    if json {
        output_json(&plan, &pattern)?;
    } else if ndjson {
        output_ndjson(&plan)?;
    } else {
        output_grid(&plan, &pattern);
    }

    Ok(())
}

fn output_json(plan: &PaintPlan, pattern: &Pattern) -> anyhow::Result<()> {
    let output = PreviewOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        budget: plan.budget,
        rows: pattern.rows(),
        cols: pattern.cols(),
        active_cells: plan.active_cells(),
        base_quota: plan.base_quota,
        remainder: plan.remainder,
        anchor: plan.anchor,
        cells: plan.cells.clone(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_ndjson(plan: &PaintPlan) -> anyhow::Result<()> {
    for cell in &plan.cells {
        println!("{}", serde_json::to_string(cell)?);
    }
    Ok(())
}

fn output_grid(plan: &PaintPlan, pattern: &Pattern) {
    println!("{}", style("Pattern Preview").bold());
    println!("{}", "─".repeat(50));

    for row in 0..pattern.rows() {
        for col in 0..pattern.cols() {
            if pattern.is_active(row, col) {
                print!("{}", style("██").green());
            } else {
                print!("{}", style("··").dim());
            }
        }
        println!();
    }

    println!();
    println!("Active cells: {}", style(plan.active_cells()).cyan());
    println!(
        "Budget: {} commits, {} per cell",
        style(plan.budget).cyan(),
        style(plan.base_quota).cyan()
    );
    if plan.remainder > 0 {
        println!(
            "The first {} cells get one extra commit",
            style(plan.remainder).yellow()
        );
    }
    if let Some((first, last)) = plan.date_span() {
        println!(
            "Dates: {} to {}",
            style(first.format("%Y-%m-%d")).dim(),
            style(last.format("%Y-%m-%d")).dim()
        );
    }
}
