//! Error type shared by every operation in the crate.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the shell, terminal, and fetch operations.
///
/// No variant is derived from an HTTP status code: a non-2xx response is a
/// successful fetch, and the caller inspects the status itself.
#[derive(Debug, Error)]
pub enum Error {
    /// The command ran and reported failure. Displays exactly the captured stderr.
    #[error("{stderr}")]
    Process {
        /// Exit code of the shell, or -1 when it was terminated by a signal.
        exit_code: i32,
        /// Captured standard error, the authoritative failure reason.
        stderr: String,
    },

    /// The host shell could not be launched at all.
    #[error("failed to spawn shell: {0}")]
    Spawn(#[source] std::io::Error),

    /// The HTTP transport failed (DNS, connect, TLS, body read).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Returns the captured stderr when this is a process failure.
    #[must_use]
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Process { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}
