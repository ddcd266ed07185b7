//! Child process abstraction for testability.
//!
//! Platform variants describe the process they need as a [`ProcessSpec`] and
//! hand it to a [`ProcessRunner`]. Tests swap in a runner that records specs
//! and replays scripted exit codes instead of launching anything.

use std::ffi::OsString;
use std::process::{Command, Stdio};

/// Result type for process operations.
pub type ProcessResult<T> = Result<T, std::io::Error>;

/// `CREATE_NO_WINDOW` process creation flag.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Everything needed to start one child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub program: String,
    pub args: Vec<OsString>,
    /// Pre-quoted arguments appended after `args` without further escaping
    /// on Windows. Elsewhere they are passed as ordinary arguments.
    pub raw_args: Vec<OsString>,
    pub envs: Vec<(String, String)>,
    /// Suppress the console window of the child on Windows.
    pub hidden: bool,
}

impl ProcessSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            raw_args: Vec::new(),
            envs: Vec::new(),
            hidden: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn raw_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.raw_args.push(arg.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Look up an environment variable set on this spec.
    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.envs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.envs(self.envs.iter().map(|(k, v)| (k, v)));

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            for raw in &self.raw_args {
                cmd.raw_arg(raw);
            }
            if self.hidden {
                cmd.creation_flags(CREATE_NO_WINDOW);
            }
        }
        #[cfg(not(windows))]
        {
            cmd.args(&self.raw_args);
        }

        cmd
    }
}

/// Captured result of a child process that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Abstraction over starting child processes.
pub trait ProcessRunner: Send + Sync {
    /// Start the process, wait for it to exit and capture its output.
    fn run(&self, spec: &ProcessSpec) -> ProcessResult<ProcessOutput>;

    /// Start the process and return as soon as it is spawned.
    ///
    /// The child is never waited on.
    fn spawn_detached(&self, spec: &ProcessSpec) -> ProcessResult<()>;
}

/// Real implementation backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, spec: &ProcessSpec) -> ProcessResult<ProcessOutput> {
        let output = spec.to_command().stdin(Stdio::null()).output()?;

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn spawn_detached(&self, spec: &ProcessSpec) -> ProcessResult<()> {
        let child = spec
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        tracing::debug!("Spawned detached {} (pid {})", spec.program, child.id());
        // Dropping the handle does not kill or wait for the child.
        drop(child);
        Ok(())
    }
}

/// Mock implementation for testing.
#[cfg(test)]
pub use mock::MockProcessRunner;
