//! Test environment builder for isolated Bindigo testing.
//!
//! Provides `TestEnv` - a temp working directory and a temp HOME, plus helpers
//! to run the `bindigo` binary inside them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a Bindigo CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as one JSON event.
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({}): {}", e, l))
            })
            .collect()
    }
}

/// Isolated working directory and HOME.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bindigo_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bindigo_bin: PathBuf::from(env!("CARGO_BIN_EXE_bindigo")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Write a file to the project directory, creating parents.
    pub fn write_project_file(&self, relative_path: &str, content: &str) -> PathBuf {
        write_file(&self.project_path(relative_path), content)
    }

    /// Write a file to the home directory, creating parents.
    pub fn write_home_file(&self, relative_path: &str, content: &str) -> PathBuf {
        write_file(&self.home_path(relative_path), content)
    }

    /// Run bindigo from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run bindigo from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_with_env_removed(args, env_vars, &[])
    }

    /// Run bindigo with extra env vars and with `removed` unset (e.g. `NO_COLOR`).
    pub fn run_with_env_removed(
        &self,
        args: &[&str],
        env_vars: &[(&str, &str)],
        removed: &[&str],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bindigo_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("BINDIGO_LOG")
            .env_remove("RUST_LOG");

        for key in [
            "BINDIGO_VERBOSE",
            "BINDIGO_SAVE_POSES",
            "BINDIGO_BOX_SIZE",
            "BINDIGO_MODEL",
            "BINDIGO_PDB_CACHE_DIR",
            "BINDIGO_COLOR",
        ] {
            cmd.env_remove(key);
        }

        for key in removed {
            cmd.env_remove(key);
        }

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute bindigo");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
    path.to_path_buf()
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
