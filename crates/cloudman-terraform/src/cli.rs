//! terraform CLI wrapper
//!
//! Wraps the terraform subcommands used by cloudman. Every method is one
//! subprocess invocation returning the raw (exit code, stdout, stderr)
//! triple; exit-code meaning is owned by the caller, since terraform
//! overloads codes per subcommand.

use crate::error::{Result, TerraformError};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Raw result of one engine invocation.
///
/// Not an error: callers must inspect `code` explicitly.
#[derive(Debug, Clone)]
pub struct OperationResult {
    /// Process exit code; None when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl OperationResult {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// terraform CLI wrapper scoped to one working directory.
pub struct Terraform {
    binary: PathBuf,
    working_dir: PathBuf,
}

impl Terraform {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: PathBuf::from("terraform"),
            working_dir: working_dir.into(),
        }
    }

    /// Use an alternate binary (e.g. a pinned path or an OpenTofu build).
    pub fn with_binary(working_dir: impl Into<PathBuf>, binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            working_dir: working_dir.into(),
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Run a terraform subcommand and capture its output.
    ///
    /// Errors only when the process cannot be spawned; a nonzero exit is
    /// data, not an error.
    async fn run(&self, args: &[&str]) -> Result<OperationResult> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args);
        cmd.current_dir(&self.working_dir);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!(
            "Running: terraform {} (in {})",
            args.join(" "),
            self.working_dir.display()
        );

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TerraformError::BinaryNotFound
            } else {
                TerraformError::IoError(e)
            }
        })?;

        Ok(OperationResult {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    pub async fn init(&self) -> Result<OperationResult> {
        self.run(&["init", "-no-color", "-input=false"]).await
    }

    /// Plan with `-detailed-exitcode`: 0 = empty diff, 1 = error,
    /// 2 = non-empty diff. Decode via [`PlanOutcome`](crate::PlanOutcome).
    pub async fn plan(&self) -> Result<OperationResult> {
        self.run(&["plan", "-detailed-exitcode", "-no-color", "-input=false"])
            .await
    }

    pub async fn apply(&self) -> Result<OperationResult> {
        self.run(&["apply", "-auto-approve", "-no-color", "-input=false"])
            .await
    }

    pub async fn destroy(&self) -> Result<OperationResult> {
        self.run(&["destroy", "-auto-approve", "-no-color", "-input=false"])
            .await
    }

    pub async fn validate(&self) -> Result<OperationResult> {
        self.run(&["validate", "-no-color"]).await
    }

    pub async fn output(&self, name: &str) -> Result<OperationResult> {
        self.run(&["output", "-no-color", "-raw", name]).await
    }

    pub async fn state_pull(&self) -> Result<OperationResult> {
        self.run(&["state", "pull"]).await
    }

    /// Pull and parse the current state.
    ///
    /// The one convenience that interprets an exit code: nonzero becomes
    /// `CommandFailed` carrying stderr.
    pub async fn show_state(&self) -> Result<serde_json::Value> {
        let result = self.state_pull().await?;
        if !result.success() {
            return Err(TerraformError::CommandFailed(result.stderr));
        }
        Ok(serde_json::from_str(&result.stdout)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn fake_binary(dir: &Path, script: &str) -> PathBuf {
        let path = dir.join("terraform");
        fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[tokio::test]
    async fn test_run_captures_triple() {
        let temp_dir = tempfile::tempdir().unwrap();
        let binary = fake_binary(temp_dir.path(), "echo planned; echo warned >&2; exit 2");

        let tf = Terraform::with_binary(temp_dir.path(), binary);
        let result = tf.plan().await.unwrap();

        assert_eq!(result.code, Some(2));
        assert!(!result.success());
        assert_eq!(result.stdout, "planned\n");
        assert_eq!(result.stderr, "warned\n");
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_not_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let binary = fake_binary(temp_dir.path(), "exit 1");

        let tf = Terraform::with_binary(temp_dir.path(), binary);
        let result = tf.apply().await.unwrap();

        assert_eq!(result.code, Some(1));
    }

    #[tokio::test]
    async fn test_missing_binary() {
        let temp_dir = tempfile::tempdir().unwrap();
        let tf = Terraform::with_binary(temp_dir.path(), temp_dir.path().join("no-such-binary"));

        match tf.init().await {
            Err(TerraformError::BinaryNotFound) => {}
            other => panic!("Expected BinaryNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_show_state_parses_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let binary = fake_binary(
            temp_dir.path(),
            r#"echo '{"version": 4, "resources": []}'"#,
        );

        let tf = Terraform::with_binary(temp_dir.path(), binary);
        let state = tf.show_state().await.unwrap();

        assert_eq!(state["version"], 4);
    }

    #[tokio::test]
    async fn test_show_state_surfaces_stderr() {
        let temp_dir = tempfile::tempdir().unwrap();
        let binary = fake_binary(temp_dir.path(), "echo 'no state' >&2; exit 1");

        let tf = Terraform::with_binary(temp_dir.path(), binary);
        match tf.show_state().await {
            Err(TerraformError::CommandFailed(stderr)) => {
                assert!(stderr.contains("no state"));
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
    }
}
