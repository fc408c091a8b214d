use crate::pattern::Pattern;
use anyhow::Result;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// A bare `gpaint paint` paints the builtin pattern with 1000 commits
/// anchored 44 weeks back.
pub const DEFAULT_BUDGET: u32 = 1000;
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_AUTHOR_NAME: &str = "gpaint";
pub const DEFAULT_AUTHOR_EMAIL: &str = "gpaint@users.noreply.github.com";
pub const DEFAULT_ANCHOR_WEEKS: i64 = 44;

#[derive(Parser)]
#[command(name = "gpaint")]
#[command(about = "Paint pixel patterns onto a git contribution graph with backdated commits")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Total number of commits to create", default_value_t = DEFAULT_BUDGET)]
    pub budget: u32,

    #[arg(long, help = "Branch to push to", default_value = DEFAULT_BRANCH)]
    pub branch: String,

    #[arg(long, help = "Author name for created commits", default_value = DEFAULT_AUTHOR_NAME)]
    pub author: String,

    #[arg(long, help = "Author email for created commits", default_value = DEFAULT_AUTHOR_EMAIL)]
    pub author_email: String,

    #[arg(
        long,
        help = "Date of the top-left cell (RFC3339, YYYY-MM-DD, or e.g. \"44 weeks ago\"; default 44 weeks ago)"
    )]
    pub anchor: Option<String>,

    #[arg(long, help = "Pattern file: rows of 1/# for active cells, 0/. for inactive")]
    pub pattern: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create and push the backdated commits
    Paint {
        #[arg(
            long,
            help = "Pause after each commit",
            value_parser = humantime::parse_duration,
            default_value = "50ms"
        )]
        commit_delay: Duration,

        #[arg(
            long,
            help = "Pause after each push",
            value_parser = humantime::parse_duration,
            default_value = "100ms"
        )]
        push_delay: Duration,
    },
    /// Show the pattern and commit allocation without touching the repository
    Preview {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
}

impl CommonArgs {
    pub fn load_pattern(&self) -> crate::error::Result<Pattern> {
        match &self.pattern {
            Some(path) => Pattern::from_file(path),
            None => Ok(Pattern::builtin()),
        }
    }

    pub fn resolve_anchor(&self) -> crate::error::Result<DateTime<Utc>> {
        match self.anchor.as_deref() {
            Some(input) => crate::util::parse_anchor(input),
            None => Ok(Utc::now() - ChronoDuration::weeks(DEFAULT_ANCHOR_WEEKS)),
        }
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Paint {
                commit_delay,
                push_delay,
            } => crate::paint::exec(self.common, commit_delay, push_delay),
            Commands::Preview { json, ndjson } => crate::preview::exec(self.common, json, ndjson),
        }
    }
}
