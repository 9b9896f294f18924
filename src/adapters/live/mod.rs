//! Live adapters for real external interactions.

pub mod shell;
pub mod terminal;

pub use shell::{LiveShellExecutor, ShellProgram};
pub use terminal::{LiveTerminal, PromptSession};
