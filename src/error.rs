//! Load / Save Errors

use crate::models::TaskId;

/// Errors at the file import/export boundary.
/// Display text is what the user sees after the failure prefix.
#[derive(Debug, thiserror::Error)]
pub enum TaskFileError {
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate task id {0}")]
    DuplicateId(TaskId),
    #[error("could not read file: {0}")]
    Read(String),
    #[error("{0}")]
    Host(String),
}
