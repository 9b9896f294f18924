//! Live shell executor using `tokio::process::Command`.

use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::Error;
use crate::ports::shell::{ShellExecutor, ShellFuture, ShellOutput};

/// The shell program and the flag that makes it read a command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellProgram {
    /// Program to launch, e.g. `sh` or `cmd`.
    pub program: String,
    /// Flag preceding the command string, e.g. `-c` or `/C`.
    pub flag: String,
}

impl ShellProgram {
    /// Builds a shell program from its name, picking `/C` for `cmd` and `-c` otherwise.
    #[must_use]
    pub fn named(program: impl Into<String>) -> Self {
        let program = program.into();
        let is_cmd = std::path::Path::new(&program)
            .file_stem()
            .is_some_and(|stem| stem.eq_ignore_ascii_case("cmd"));
        let flag = if is_cmd { "/C" } else { "-c" };
        Self { program, flag: flag.to_string() }
    }
}

impl Default for ShellProgram {
    fn default() -> Self {
        if cfg!(windows) {
            Self::named("cmd")
        } else {
            Self::named("sh")
        }
    }
}

/// Live shell executor that runs commands via the host shell.
#[derive(Debug, Clone, Default)]
pub struct LiveShellExecutor {
    shell: ShellProgram,
}

impl LiveShellExecutor {
    /// Creates an executor that launches commands through `shell`.
    #[must_use]
    pub fn new(shell: ShellProgram) -> Self {
        Self { shell }
    }
}

impl ShellExecutor for LiveShellExecutor {
    fn run<'a>(&'a self, command: &'a str) -> ShellFuture<'a> {
        Box::pin(async move {
            debug!(shell = %self.shell.program, command, "running command");
            let output = Command::new(&self.shell.program)
                .arg(&self.shell.flag)
                .arg(command)
                .stdin(Stdio::null())
                .output()
                .await
                .map_err(Error::Spawn)?;

            let exit_code = output.status.code().unwrap_or(-1);
            debug!(command, exit_code, "command exited");
            Ok(ShellOutput {
                exit_code,
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        })
    }
}
