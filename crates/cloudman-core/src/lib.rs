//! Cloudman core
//!
//! Project-root discovery, env-file loading and the typed invocation
//! context shared by all cloudman subcommands.

pub mod context;
pub mod env_file;
pub mod error;

pub use context::{Context, DEFAULT_REGION, Environment};
pub use env_file::{load_env_file, load_env_file_from};
pub use error::{CoreError, Result};

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Locate the project root.
///
/// Search order:
/// 1. Environment variable CLOUDMAN_PROJECT_ROOT (must contain terraform/)
/// 2. Current directory and its ancestors, looking for a terraform/ directory
pub fn find_project_root() -> Result<PathBuf> {
    if let Ok(root) = std::env::var("CLOUDMAN_PROJECT_ROOT") {
        let path = PathBuf::from(&root);
        debug!(env_root = %root, "Checking CLOUDMAN_PROJECT_ROOT");
        if path.join("terraform").is_dir() {
            info!(project_root = %path.display(), "Found project root from environment variable");
            return Ok(path);
        }
    }

    let start_dir = std::env::current_dir()?;
    let mut current = start_dir.clone();
    debug!(start_dir = %start_dir.display(), "Searching for project root");

    loop {
        if current.join("terraform").is_dir() {
            info!(project_root = %current.display(), "Found project root");
            return Ok(current);
        }

        if !current.pop() {
            break;
        }
    }

    warn!(start_dir = %start_dir.display(), "Project root not found");
    Err(CoreError::ProjectRootNotFound(start_dir))
}

/// Terraform working directory for an environment:
/// `<root>/terraform/environments/<name>`.
pub fn terraform_dir(project_root: &Path, environment: &Environment) -> PathBuf {
    project_root
        .join("terraform")
        .join("environments")
        .join(environment.as_str())
}
