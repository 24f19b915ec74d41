use thiserror::Error;

use crate::auth::pattern::PatternError;
use crate::report::ReportError;
use crate::snapshot::SnapshotError;

#[derive(Error, Debug)]
pub enum PreflightError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid action pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("{0}")]
    Snapshot(#[from] SnapshotError),

    #[error("{0}")]
    Report(#[from] ReportError),
}

pub type Result<T> = std::result::Result<T, PreflightError>;
