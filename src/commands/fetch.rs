//! `hostkit fetch` command.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::context::ServiceContext;
use crate::fetch::FetchOptions;

/// Downloads `url` to `output`, or to `out` when no path is given.
///
/// # Errors
///
/// Returns an error string on transport failure or when the body can't be written.
pub async fn run<W: Write>(
    ctx: &ServiceContext,
    url: &str,
    options: &FetchOptions,
    output: Option<&Path>,
    out: &mut W,
) -> Result<(), String> {
    let body = ctx.fetcher.fetch_file(url, options).await.map_err(|e| e.to_string())?;
    match output {
        Some(path) => {
            std::fs::write(path, &body)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            info!(path = %path.display(), len = body.len(), "saved response body");
            Ok(())
        }
        None => out.write_all(&body).map_err(|e| format!("write error: {e}")),
    }
}
