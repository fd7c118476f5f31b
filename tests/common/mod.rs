// Shared test helpers for integration tests.
// Used by cli_contract.rs and cli_flows.rs.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_claude-batch"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// A scratch home directory with a fake `claude` that echoes its arguments
/// one per line.
pub struct Sandbox {
    pub home: TempDir,
    pub claude: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        Self::with_claude(r#"printf '%s\n' "$@""#)
    }

    pub fn with_claude(body: &str) -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        let claude = write_script(home.path(), "fake-claude", body);
        Sandbox { home, claude }
    }

    pub fn add_command(&self, name: &str, body: &str) {
        let dir = self.home.path().join(".claude/commands");
        std::fs::create_dir_all(&dir).expect("failed to create commands dir");
        std::fs::write(dir.join(format!("{name}.md")), body).expect("failed to write command");
    }

    pub fn output_dir(&self) -> PathBuf {
        self.home.path().join(".claude-batch/tmp")
    }

    /// Files written under the output directory.
    pub fn outputs(&self) -> Vec<PathBuf> {
        match std::fs::read_dir(self.output_dir()) {
            Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
            Err(_) => vec![],
        }
    }

    /// Runs the binary with the given args.
    /// Returns (stdout, stderr, exit_code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(binary_path())
            .args(args)
            .env("CLAUDE_BATCH_HOME", self.home.path())
            .env("CLAUDE_BATCH_CLAUDE", &self.claude)
            .env_remove("CLAUDE_BATCH_LOG")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .expect("failed to execute binary");

        let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
        let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
        let exit_code = output.status.code().unwrap_or(-1);
        (stdout, stderr, exit_code)
    }
}

pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("failed to write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("failed to chmod script");
    path
}

/// Extracts the path from the `Claude output written to: <path>` line.
pub fn reported_path(stdout: &str) -> PathBuf {
    let line = stdout
        .lines()
        .find_map(|l| l.strip_prefix("Claude output written to: "))
        .unwrap_or_else(|| panic!("no output path reported in: {stdout}"));
    PathBuf::from(line)
}
