use crate::error::{GpaintError, Result};
use chrono::{DateTime, Utc};
use gix::discover;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The version-control operations the painter needs. Narrow on purpose so
/// the sequencing logic can run against a recording fake in tests.
pub trait Vcs {
    fn stage(&mut self, path: &Path) -> Result<()>;
    fn commit(&mut self, message: &str, date: DateTime<Utc>) -> Result<()>;
    fn push(&mut self) -> Result<()>;
}

/// Commit author identity, rendered as `Name <email>`.
#[derive(Debug, Clone)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let repo = discover(&repo_path)?;
        let path = repo
            .workdir()
            .ok_or_else(|| GpaintError::BareRepository(repo.path().to_path_buf()))?
            .to_path_buf();

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `Vcs` backed by the `git` binary, run in the repository workdir.
///
/// Commits carry the configured identity and the computed target date as
/// both author and committer time instead of wall-clock time.
pub struct GitCli {
    workdir: PathBuf,
    author: Identity,
    branch: String,
}

impl GitCli {
    pub fn new(workdir: &Path, author: Identity, branch: String) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
            author,
            branch,
        }
    }

    fn run(&self, args: &[&str], envs: &[(&str, &str)]) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(&self.workdir);
        for (key, value) in envs {
            cmd.env(key, value);
        }

        let output = cmd.output()?;
        if !output.status.success() {
            return Err(GpaintError::GitCommand {
                command: args.join(" "),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl Vcs for GitCli {
    fn stage(&mut self, path: &Path) -> Result<()> {
        let path = path.to_string_lossy();
        self.run(&["add", "--", path.as_ref()], &[])
    }

    fn commit(&mut self, message: &str, date: DateTime<Utc>) -> Result<()> {
        let date = date.to_rfc3339();
        self.run(
            &["commit", "--quiet", "-m", message, "--date", &date],
            &[
                ("GIT_AUTHOR_NAME", &self.author.name),
                ("GIT_AUTHOR_EMAIL", &self.author.email),
                ("GIT_COMMITTER_NAME", &self.author.name),
                ("GIT_COMMITTER_EMAIL", &self.author.email),
                ("GIT_COMMITTER_DATE", &date),
            ],
        )
    }

    fn push(&mut self) -> Result<()> {
        self.run(&["push", "--quiet", "origin", &self.branch], &[])
    }
}
