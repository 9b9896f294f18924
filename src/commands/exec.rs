//! `hostkit exec` command.

use std::io::Write;

use crate::context::ServiceContext;

/// Runs `command` and writes its stdout verbatim.
///
/// # Errors
///
/// Returns the command's stderr (without its final newline) when it fails.
pub async fn run<W: Write>(ctx: &ServiceContext, command: &str, out: &mut W) -> Result<(), String> {
    let stdout = ctx
        .shell
        .execute(command)
        .await
        .map_err(|e| e.to_string().trim_end_matches(['\r', '\n']).to_string())?;
    out.write_all(stdout.as_bytes()).map_err(|e| format!("write error: {e}"))
}
