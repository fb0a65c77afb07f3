#![allow(deprecated)] // TODO: migrate cargo_bin to the cargo_bin! macro

//! Shared helpers for CLI tests.
//!
//! Tests drive the real binary against a scratch project whose PATH leads
//! to a scripted `terraform` stub. The stub records every invocation in
//! calls.log before playing back its scripted exit codes, so tests can
//! assert exactly which engine subcommands ran.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

pub struct StubProject {
    root: TempDir,
}

impl StubProject {
    /// Scratch project with a stub `terraform`.
    ///
    /// `script` is a shell fragment dispatching on `$cmd` (the engine
    /// subcommand); the stub appends `exit 0` as the fall-through.
    pub fn new(script: &str) -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("terraform/environments/dev")).unwrap();

        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).unwrap();

        let log = root.path().join("calls.log");
        let stub = format!(
            "#!/bin/sh\necho \"$@\" >> \"{}\"\ncmd=\"$1\"\n{}\nexit 0\n",
            log.display(),
            script
        );

        let stub_path = bin_dir.join("terraform");
        fs::write(&stub_path, stub).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&stub_path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        Self { root }
    }

    /// The binary under test, wired to the stub and the scratch project.
    pub fn cmd(&self) -> Command {
        let path = format!(
            "{}:{}",
            self.root.path().join("bin").display(),
            std::env::var("PATH").unwrap_or_default()
        );

        let mut cmd = Command::cargo_bin("cloudman").unwrap();
        cmd.env("PATH", path)
            .env("CLOUDMAN_PROJECT_ROOT", self.root.path())
            .env("NO_COLOR", "1")
            .current_dir(self.root.path());
        cmd
    }

    /// Full invocation lines recorded by the stub, oldest first.
    pub fn invocations(&self) -> Vec<String> {
        let log = self.root.path().join("calls.log");
        if !log.exists() {
            return Vec::new();
        }
        fs::read_to_string(log)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// How many times an engine subcommand was invoked.
    pub fn count(&self, subcommand: &str) -> usize {
        self.invocations()
            .iter()
            .filter(|line| line.split_whitespace().next() == Some(subcommand))
            .count()
    }
}
