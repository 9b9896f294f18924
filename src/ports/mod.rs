//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the shim and the host
//! (process launcher, terminal). Live implementations are in
//! `src/adapters/live/`.
//! HTTP goes straight through [`crate::fetch::Fetcher`].

pub mod shell;
pub mod terminal;

pub use shell::{ShellExecutor, ShellFuture, ShellOutput};
pub use terminal::{PromptFuture, Terminal};
