//! Service context bundling the port implementations.

use crate::adapters::live::{LiveShellExecutor, LiveTerminal};
use crate::config::Config;
use crate::fetch::Fetcher;
use crate::ports::shell::ShellExecutor;
use crate::ports::terminal::Terminal;

/// The shell, terminal, and HTTP access one command runs against.
///
/// Fields are public so callers and tests can swap in their own port
/// implementations after building a live context.
pub struct ServiceContext {
    /// Shell executor for running commands.
    pub shell: Box<dyn ShellExecutor>,
    /// Terminal for prompting the user.
    pub terminal: Box<dyn Terminal>,
    /// HTTP fetcher.
    pub fetcher: Fetcher,
}

impl ServiceContext {
    /// Creates a context over the real shell and terminal.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        Self {
            shell: Box::new(LiveShellExecutor::new(config.shell.clone())),
            terminal: Box::new(LiveTerminal),
            fetcher: Fetcher::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::ShellProgram;
    use crate::ports::shell::{ShellFuture, ShellOutput};

    struct FixedShell;

    impl ShellExecutor for FixedShell {
        fn run<'a>(&'a self, command: &'a str) -> ShellFuture<'a> {
            Box::pin(async move {
                Ok(ShellOutput {
                    exit_code: 0,
                    stdout: format!("ran {command}"),
                    stderr: String::new(),
                })
            })
        }
    }

    #[tokio::test]
    async fn shell_can_be_swapped() {
        let mut ctx = ServiceContext::live(&Config::default());
        ctx.shell = Box::new(FixedShell);
        assert_eq!(ctx.shell.execute("deploy").await.unwrap(), "ran deploy");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn live_context_uses_configured_shell() {
        let config =
            Config { shell: ShellProgram::named("/definitely/not/a/shell"), ..Config::default() };
        let ctx = ServiceContext::live(&config);
        assert!(matches!(ctx.shell.run("true").await, Err(crate::Error::Spawn(_))));
    }
}
