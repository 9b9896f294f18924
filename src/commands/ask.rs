//! `hostkit ask` command.

use std::io::Write;

use crate::answer::is_answer_yes;
use crate::context::ServiceContext;

/// Prompts once and writes `yes` or `no` according to the answer.
///
/// # Errors
///
/// Returns an error string if the verdict cannot be written.
pub async fn run<W: Write>(ctx: &ServiceContext, prompt: &str, out: &mut W) -> Result<(), String> {
    let answer = ctx.terminal.prompt(prompt).await;
    let verdict = if is_answer_yes(&answer) { "yes" } else { "no" };
    writeln!(out, "{verdict}").map_err(|e| format!("write error: {e}"))
}
