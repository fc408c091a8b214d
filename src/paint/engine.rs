use crate::error::Result;
use crate::git::Vcs;
use crate::model::{CellPlan, PaintPlan, PaintReport, ScratchCommit, ScratchRecord};
use std::path::PathBuf;
use std::time::Duration;

/// Interval, in commits, between intermediate pushes.
pub const PUSH_INTERVAL: u32 = 50;

/// Name of the scratch artifact in the repository workdir. Overwritten
/// before every commit so there is always a staged change.
pub const SCRATCH_FILE: &str = "data.json";

/// Subject prefix for every generated commit message.
pub const MESSAGE_PREFIX: &str = "gpaint";

#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub per_commit: Duration,
    pub after_push: Duration,
}

pub struct PaintOptions {
    pub scratch_path: PathBuf,
    pub author: String,
    pub branch: String,
    pub pacing: Pacing,
}

/// Progress notifications for the CLI layer; the engine never prints.
pub enum PaintEvent<'a> {
    CellStarted {
        index: usize,
        total: usize,
        cell: &'a CellPlan,
    },
    CommitCreated {
        seq: u32,
        budget: u32,
        cell: &'a CellPlan,
    },
    Pushed {
        seq: u32,
    },
}

/// Walk the plan and create one backdated commit per quota unit.
///
/// Strictly sequential: each commit is staged, committed, and slept on
/// before the next begins. The walk stops the moment the global counter
/// reaches the budget, even inside a cell, and always ends with a final
/// push. Collaborator failures propagate immediately; commits already
/// created are left in place.
pub fn run(
    plan: &PaintPlan,
    vcs: &mut dyn Vcs,
    opts: &PaintOptions,
    sleep: &mut dyn FnMut(Duration),
    observe: &mut dyn FnMut(PaintEvent<'_>),
) -> Result<PaintReport> {
    let mut created: u32 = 0;
    let mut cells_completed = 0;
    let mut pushes: u32 = 0;
    let total = plan.cells.len();

    'cells: for (index, cell) in plan.cells.iter().enumerate() {
        observe(PaintEvent::CellStarted { index, total, cell });

        for _ in 0..cell.quota {
            if created >= plan.budget {
                break 'cells;
            }
            created += 1;

            let message = format!("{MESSAGE_PREFIX} {created}/{}", plan.budget);
            write_scratch(opts, cell, &message)?;
            vcs.stage(&opts.scratch_path)?;
            vcs.commit(&message, cell.date)?;
            observe(PaintEvent::CommitCreated {
                seq: created,
                budget: plan.budget,
                cell,
            });

            if created % PUSH_INTERVAL == 0 {
                vcs.push()?;
                pushes += 1;
                observe(PaintEvent::Pushed { seq: created });
                sleep(opts.pacing.after_push);
            } else {
                sleep(opts.pacing.per_commit);
            }
        }

        cells_completed += 1;
    }

    vcs.push()?;
    pushes += 1;

    Ok(PaintReport {
        commits_created: created,
        cells_completed,
        pushes,
    })
}

fn write_scratch(opts: &PaintOptions, cell: &CellPlan, message: &str) -> Result<()> {
    let record = ScratchRecord {
        date: cell.date.to_rfc3339(),
        commit: ScratchCommit {
            message: message.to_string(),
            author: opts.author.clone(),
            branch: opts.branch.clone(),
        },
    };
    std::fs::write(&opts.scratch_path, serde_json::to_vec_pretty(&record)?)?;
    Ok(())
}
