//! Terraform adapter for Cloudman
//!
//! Thin wrapper around the `terraform` binary. Each subcommand (init, plan,
//! apply, destroy, validate, output, state pull) is one subprocess
//! invocation returning a raw [`OperationResult`] triple; interpretation of
//! exit codes belongs to the orchestration layer, with the single exception
//! of [`PlanOutcome`], which decodes the `-detailed-exitcode` plan contract.
//!
//! # Requirements
//!
//! - `terraform` must be installed and on PATH (or supplied via
//!   [`Terraform::with_binary`])
//!
//! # Example
//!
//! ```ignore
//! use cloudman_terraform::{PlanOutcome, Terraform};
//!
//! let tf = Terraform::new("terraform/environments/dev");
//! let plan = tf.plan().await?;
//! match PlanOutcome::from_result(&plan) {
//!     PlanOutcome::ChangesPending => { /* gate and apply */ }
//!     PlanOutcome::NoChanges => { /* nothing to do */ }
//!     PlanOutcome::Error => { /* abort */ }
//!     PlanOutcome::Other(code) => { /* warn */ }
//! }
//! ```

pub mod cli;
pub mod error;
pub mod plan;

pub use cli::{OperationResult, Terraform};
pub use error::{Result, TerraformError};
pub use plan::PlanOutcome;
