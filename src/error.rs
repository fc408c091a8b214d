use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GpaintError>;

#[derive(Error, Debug)]
pub enum GpaintError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Pattern error: {0}")]
    Pattern(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("git {command} failed with {status}: {stderr}")]
    GitCommand {
        command: String,
        status: String,
        stderr: String,
    },
    #[error("Repository has no working directory: {}", .0.display())]
    BareRepository(PathBuf),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for GpaintError {
    fn from(err: gix::open::Error) -> Self {
        GpaintError::Git(Box::new(err))
    }
}

impl From<gix::discover::Error> for GpaintError {
    fn from(err: gix::discover::Error) -> Self {
        GpaintError::GitDiscover(Box::new(err))
    }
}
