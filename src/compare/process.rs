//! Narrow subprocess abstraction.
//!
//! The driver and the size inspector only need an exit status and the
//! captured output streams, so that is all this interface exposes.
//! Tests substitute a scripted runner for real subprocess execution.

use std::io;
use std::path::Path;
use std::process::Command;

/// Captured result of a completed subprocess.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Exit code, if the process terminated normally.
    pub code: Option<i32>,
    /// Captured standard output, lossily decoded.
    pub stdout: String,
    /// Captured standard error, lossily decoded.
    pub stderr: String,
}

/// Runs a command to completion and captures its output.
pub trait ProcessRunner {
    /// Run `program` with `args` in `cwd`, blocking until it exits.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<ProcessOutput>;
}

/// Runner backed by [`std::process::Command`].
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a system runner.
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<ProcessOutput> {
        let output = Command::new(program).args(args).current_dir(cwd).output()?;

        Ok(ProcessOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
