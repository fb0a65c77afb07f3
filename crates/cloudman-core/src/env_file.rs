//! Dotfile loading for credentials and provider settings.
//!
//! Reads `.env` from the current directory at startup and exports each
//! KEY=VALUE pair into the process environment. Variables already present
//! in the environment win over the file.

use crate::error::{CoreError, Result};
use std::path::Path;
use tracing::debug;

/// Load `./.env` if it exists. Missing file is not an error.
pub fn load_env_file() -> Result<()> {
    load_env_file_from(Path::new(".env"))
}

/// Load a specific env file. Missing file is not an error.
pub fn load_env_file_from(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let content = std::fs::read_to_string(path).map_err(|e| CoreError::EnvFileError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    for (key, value) in parse_env_lines(&content) {
        if std::env::var_os(&key).is_some() {
            continue;
        }
        debug!(key = %key, "Setting variable from env file");
        // SAFETY: called once from main before any threads are spawned
        unsafe {
            std::env::set_var(&key, &value);
        }
    }

    Ok(())
}

/// Parse KEY=VALUE lines. Blank lines and `#` comments are skipped,
/// surrounding single or double quotes on the value are stripped.
fn parse_env_lines(content: &str) -> Vec<(String, String)> {
    let mut vars = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
            .unwrap_or(value);

        vars.push((key.to_string(), value.to_string()));
    }

    vars
}
