use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RevzError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}:{}: not a number: {:?}", .path.display(), .line, .text)]
    Parse {
        path: PathBuf,
        line: usize,
        text: String,
    },

    #[error("Malformed store file {}: {}", .path.display(), .reason)]
    MalformedStore { path: PathBuf, reason: String },

    #[error("No topic matches alias: {0:?}")]
    AliasNotFound(String),

    #[error("No exact match for {0} in sorted input")]
    TargetNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RevzError>;
