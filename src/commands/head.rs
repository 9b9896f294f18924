//! `hostkit head` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::fetch::FetchOptions;

/// Writes the status line and headers of `url`'s response.
///
/// # Errors
///
/// Returns an error string on transport failure or write failure.
pub async fn run<W: Write>(
    ctx: &ServiceContext,
    url: &str,
    options: &FetchOptions,
    out: &mut W,
) -> Result<(), String> {
    let response = ctx.fetcher.fetch(url, options).await.map_err(|e| e.to_string())?;
    let write_err = |e: std::io::Error| format!("write error: {e}");

    writeln!(out, "{:?} {}", response.version(), response.status()).map_err(write_err)?;
    for (name, value) in response.headers() {
        let value = value.to_str().unwrap_or("<non-ascii>");
        writeln!(out, "{name}: {value}").map_err(write_err)?;
    }
    Ok(())
}
