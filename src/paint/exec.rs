use crate::cli::CommonArgs;
use crate::git::{GitCli, GitRepo, Identity};
use crate::paint::engine::{self, Pacing, PaintEvent, PaintOptions, SCRATCH_FILE};
use crate::plan;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn exec(common: CommonArgs, commit_delay: Duration, push_delay: Duration) -> anyhow::Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;
    let pattern = common.load_pattern().context("Failed to load pattern")?;
    let anchor = common.resolve_anchor().context("Failed to resolve anchor date")?;
    let plan = plan::build_plan(&pattern, anchor, common.budget)
        .context("Failed to allocate commits over the pattern")?;

    let author = Identity {
        name: common.author.clone(),
        email: common.author_email.clone(),
    };
    super::output::print_banner(&plan, &pattern, repo.path(), &author, &common.branch);

    let mut vcs = GitCli::new(repo.path(), author.clone(), common.branch.clone());
    let opts = PaintOptions {
        scratch_path: repo.path().join(SCRATCH_FILE),
        author: author.to_string(),
        branch: common.branch.clone(),
        pacing: Pacing {
            per_commit: commit_delay,
            after_push: push_delay,
        },
    };

    let pb = ProgressBar::new(u64::from(plan.budget));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let report = engine::run(
        &plan,
        &mut vcs,
        &opts,
        &mut |duration| std::thread::sleep(duration),
        &mut |event| match event {
            PaintEvent::CellStarted { index, total, cell } => {
                pb.set_message(format!(
                    "cell [{},{}] ({}/{})",
                    cell.row,
                    cell.col,
                    index + 1,
                    total
                ));
            }
            PaintEvent::CommitCreated { .. } => pb.inc(1),
            PaintEvent::Pushed { seq } => pb.println(format!("Pushed after commit {seq}")),
        },
    )
    .context("Painting failed")?;

    pb.finish_and_clear();
    super::output::print_summary(&report);

    Ok(())
}
