//! Terraform adapter error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerraformError {
    #[error("terraform not found. Please install: https://developer.hashicorp.com/terraform/install")]
    BinaryNotFound,

    #[error("terraform command failed: {0}")]
    CommandFailed(String),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TerraformError>;
