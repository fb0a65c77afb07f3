//! Inventory error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("EC2 query failed: {0}")]
    Ec2(String),

    #[error("S3 query failed: {0}")]
    S3(String),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
