//! Environment-driven settings for the `hostkit` binary.

use std::env;

use crate::adapters::live::ShellProgram;

/// Default bearer token for fetches.
pub const TOKEN_VAR: &str = "HOSTKIT_TOKEN";
/// Shell program override.
pub const SHELL_VAR: &str = "HOSTKIT_SHELL";

/// Settings read from the environment (and an optional `.env` file).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Bearer token used when a fetch doesn't pass one explicitly.
    pub bearer_token: Option<String>,
    /// Shell that runs commands.
    pub shell: ShellProgram,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        // A missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Self {
            bearer_token: get(TOKEN_VAR),
            shell: get(SHELL_VAR).map(ShellProgram::named).unwrap_or_default(),
        }
    }
}
