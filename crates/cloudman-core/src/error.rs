use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(
        "Project root not found\nSearched upward from: {0}\nHint: run inside a project containing a terraform/ directory, or set CLOUDMAN_PROJECT_ROOT"
    )]
    ProjectRootNotFound(PathBuf),

    #[error("Failed to read env file: {path}\nReason: {message}")]
    EnvFileError { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
