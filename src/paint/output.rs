use crate::git::Identity;
use crate::model::{PaintPlan, PaintReport};
use crate::pattern::Pattern;
use console::style;
use std::path::Path;

pub fn print_banner(
    plan: &PaintPlan,
    pattern: &Pattern,
    repo_path: &Path,
    author: &Identity,
    branch: &str,
) {
    println!("{}", style("Contribution Graph Painter").bold());
    println!("{}", "─".repeat(50));
    println!("Repository: {}", style(repo_path.display()).cyan());
    println!(
        "Branch: {}  Author: {}",
        style(branch).cyan(),
        style(author).cyan()
    );
    println!(
        "Pattern: {} rows x {} cols, {} active cells",
        pattern.rows(),
        pattern.cols(),
        style(plan.active_cells()).cyan()
    );
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
    println!();
}

pub fn print_summary(report: &PaintReport) {
    println!();
    println!(
        "{}",
        style(format!("All {} commits completed", report.commits_created))
            .green()
            .bold()
    );
    println!(
        "Cells painted: {}  Pushes: {}",
        style(report.cells_completed).cyan(),
        style(report.pushes).cyan()
    );
}
