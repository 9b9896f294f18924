//! Command dispatch and handlers.

pub mod ask;
pub mod exec;
pub mod fetch;
pub mod head;

use std::io::{self, Write};

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::fetch::FetchOptions;

/// Dispatch a parsed command to its handler on a current-thread runtime.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = Config::from_env();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;

    let ctx = ServiceContext::live(&config);

    // Unlocked handle: a prompt locks stdout itself from the blocking pool.
    let mut out = io::stdout();
    let result = runtime.block_on(dispatch_with_context(command, &ctx, &config, &mut out));
    let flushed = out.flush().map_err(|e| format!("flush error: {e}"));
    result.and(flushed)
}

/// Dispatch a command with the given service context.
async fn dispatch_with_context<W: Write>(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
    out: &mut W,
) -> Result<(), String> {
    match command {
        Command::Exec { command } => exec::run(ctx, command, out).await,
        Command::Ask { prompt } => ask::run(ctx, prompt, out).await,
        Command::Fetch { url, token, output } => {
            let options = fetch_options(token.as_deref(), config);
            fetch::run(ctx, url, &options, output.as_deref(), out).await
        }
        Command::Head { url, token } => {
            head::run(ctx, url, &fetch_options(token.as_deref(), config), out).await
        }
    }
}

/// An explicit `--token` wins over `HOSTKIT_TOKEN`.
fn fetch_options(token: Option<&str>, config: &Config) -> FetchOptions {
    FetchOptions::from(token.or(config.bearer_token.as_deref()))
}
