//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `hostkit`.
#[derive(Debug, Parser)]
#[command(name = "hostkit", version, about = "Run commands, ask questions, fetch URLs")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a command through the host shell and print its stdout.
    Exec {
        /// Command string handed to the shell unchanged.
        command: String,
    },
    /// Ask a question on the terminal and print `yes` or `no`.
    Ask {
        /// Prompt text.
        prompt: String,
    },
    /// Download a URL's body.
    Fetch {
        /// URL to GET.
        url: String,
        /// Bearer token (defaults to `HOSTKIT_TOKEN`).
        #[arg(long)]
        token: Option<String>,
        /// Write the body here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a URL's status line and headers without reading the body.
    Head {
        /// URL to GET.
        url: String,
        /// Bearer token (defaults to `HOSTKIT_TOKEN`).
        #[arg(long)]
        token: Option<String>,
    },
}
