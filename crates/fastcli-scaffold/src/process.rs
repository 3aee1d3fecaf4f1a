//! External process delegation.
//!
//! External tools (git, pip, uvicorn, python) are reached through the
//! [`ProcessRunner`] trait so the actions above it can be exercised in tests
//! without spawning anything. [`SystemRunner`] is the real implementation;
//! every call blocks until the child exits.

use std::process::{Command, Stdio};

use camino::Utf8Path;
use tracing::debug;

use crate::error::{Error, Result};

/// Captured outcome of a delegated process.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Whether the child exited with status zero.
    pub success: bool,
    /// Exit code, if the child exited normally.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: Vec<u8>,
    /// Captured standard error, lossily decoded.
    pub stderr: String,
}

impl RunOutput {
    /// Standard output lossily decoded to a string.
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

/// Capability for invoking external processes.
pub trait ProcessRunner {
    /// Run a command to completion, capturing its output.
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Utf8Path>) -> Result<RunOutput>;

    /// Run a command with inherited stdio, returning its exit code
    /// (`None` when terminated by a signal).
    fn run_interactive(&self, program: &str, args: &[&str]) -> Result<Option<i32>>;
}

/// [`ProcessRunner`] backed by [`std::process::Command`].
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Utf8Path>) -> Result<RunOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        debug!("running: {} {}", program, args.join(" "));
        let output = cmd
            .output()
            .map_err(|e| Error::process_execution(format!("{program}: {e}")))?;

        Ok(RunOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run_interactive(&self, program: &str, args: &[&str]) -> Result<Option<i32>> {
        debug!("running (interactive): {} {}", program, args.join(" "));
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::process_execution(format!("{program}: {e}")))?;

        Ok(status.code())
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::RefCell;

    use super::*;

    /// Records invocations and scripts outcomes instead of spawning.
    #[derive(Default)]
    pub struct MockRunner {
        pub calls: RefCell<Vec<String>>,
        /// Commands whose joined form contains any of these fail.
        pub failures: Vec<String>,
        /// Stdout returned by every successful `run`.
        pub stdout: Vec<u8>,
    }

    impl MockRunner {
        fn record(&self, program: &str, args: &[&str]) -> bool {
            let joined = format!("{} {}", program, args.join(" "));
            let failed = self.failures.iter().any(|f| joined.contains(f.as_str()));
            self.calls.borrow_mut().push(joined);
            failed
        }
    }

    impl ProcessRunner for MockRunner {
        fn run(&self, program: &str, args: &[&str], _cwd: Option<&Utf8Path>) -> Result<RunOutput> {
            let failed = self.record(program, args);
            Ok(RunOutput {
                success: !failed,
                code: Some(if failed { 1 } else { 0 }),
                stdout: if failed { Vec::new() } else { self.stdout.clone() },
                stderr: if failed { "scripted failure".into() } else { String::new() },
            })
        }

        fn run_interactive(&self, program: &str, args: &[&str]) -> Result<Option<i32>> {
            let failed = self.record(program, args);
            Ok(Some(if failed { 1 } else { 0 }))
        }
    }
}
