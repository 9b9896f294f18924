//! Shell executor port for running external commands.

use std::future::Future;
use std::pin::Pin;

use crate::error::{Error, Result};

/// Boxed future type alias used by [`ShellExecutor`] to keep the trait dyn-compatible.
pub type ShellFuture<'a> = Pin<Box<dyn Future<Output = Result<ShellOutput>> + Send + 'a>>;

/// The output of a shell command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOutput {
    /// The exit code of the process, -1 when terminated by a signal.
    pub exit_code: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl ShellOutput {
    /// Whether the process exited successfully.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Settles the outcome: stdout on success, stderr as the failure otherwise.
    ///
    /// Stdout is discarded on the failure path even when the command wrote some.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Process`] carrying the captured stderr when the exit
    /// code is non-zero.
    pub fn settle(self) -> Result<String> {
        if self.success() {
            Ok(self.stdout)
        } else {
            Err(Error::Process { exit_code: self.exit_code, stderr: self.stderr })
        }
    }
}

/// Executes shell commands.
///
/// Implementations decide how the command reaches a shell; the settle
/// policy lives in [`ShellOutput::settle`] and is shared by all of them.
pub trait ShellExecutor: Send + Sync {
    /// Runs a command string in the host shell and captures its output.
    ///
    /// A non-zero exit is not an error at this level; see [`ShellOutput::settle`].
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be spawned.
    fn run<'a>(&'a self, command: &'a str) -> ShellFuture<'a>;

    /// Runs a command and settles it to stdout or a stderr failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Process`] when the command fails and
    /// [`Error::Spawn`] when the shell cannot be launched.
    fn execute<'a>(
        &'a self,
        command: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move { self.run(command).await?.settle() })
    }
}
