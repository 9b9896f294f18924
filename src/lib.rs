//! Async helpers for running shell commands, prompting on the terminal, and
//! fetching over HTTP.
//!
//! The free functions at the crate root use live adapters. Code that wants
//! to swap the shell or terminal goes through [`context::ServiceContext`]
//! and the [`ports`] traits instead.

pub mod adapters;
pub mod answer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod ports;

use bytes::Bytes;
use clap::Parser;

pub use answer::is_answer_yes;
pub use error::{Error, Result};
pub use fetch::{FetchOptions, Fetcher};
pub use ports::{ShellExecutor, ShellOutput, Terminal};

use adapters::live::{LiveShellExecutor, LiveTerminal};

/// Runs `command` through the host shell and resolves with its stdout.
///
/// # Errors
///
/// Returns [`Error::Process`] with the captured stderr when the command
/// exits unsuccessfully, or [`Error::Spawn`] if the shell can't be launched.
pub async fn execute(command: &str) -> Result<String> {
    LiveShellExecutor::default().execute(command).await
}

/// Prints `prompt` and a space, then resolves with the line the user types.
///
/// Never fails. Only one prompt may be in flight at a time.
pub async fn input(prompt: &str) -> String {
    LiveTerminal.prompt(prompt).await
}

/// GETs `endpoint` and resolves with the whole body, whatever the status.
///
/// # Errors
///
/// Returns [`Error::Transport`] when the request or body read fails.
pub async fn fetch_file(endpoint: &str, bearer_token: Option<&str>) -> Result<Bytes> {
    Fetcher::new().fetch_file(endpoint, &FetchOptions::from(bearer_token)).await
}

/// GETs `endpoint` and resolves with the response, body unread.
///
/// # Errors
///
/// Returns [`Error::Transport`] when the request fails.
pub async fn fetch(endpoint: &str, bearer_token: Option<&str>) -> Result<reqwest::Response> {
    Fetcher::new().fetch(endpoint, &FetchOptions::from(bearer_token)).await
}

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
