pub mod repo;

pub use repo::{GitCli, GitRepo, Identity, Vcs};
