//! Live terminal prompts over the process's stdin and stdout.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::ports::terminal::{PromptFuture, Terminal};

/// One prompt/answer exchange over a line-oriented reader and writer.
///
/// Holding the session holds the reader and writer; dropping it releases them.
pub struct PromptSession<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    /// Opens a session over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes `text` and a trailing space, then reads one line.
    ///
    /// The line terminator is stripped and nothing else is. I/O errors are
    /// logged and whatever was read before them is returned.
    pub fn ask(mut self, text: &str) -> String {
        if let Err(e) = write!(self.writer, "{text} ").and_then(|()| self.writer.flush()) {
            warn!(error = %e, "failed to write prompt");
        }

        // Raw bytes so a line with invalid UTF-8 is decoded lossily, not dropped.
        let mut buf = Vec::new();
        if let Err(e) = self.reader.read_until(b'\n', &mut buf) {
            warn!(error = %e, "failed to read answer");
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        strip_line_ending(&mut line);
        line
    }
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Live terminal that prompts on stdout and reads from stdin.
///
/// The blocking read runs on tokio's blocking pool so the runtime thread
/// stays free while the user types.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveTerminal;

impl Terminal for LiveTerminal {
    fn prompt<'a>(&'a self, text: &'a str) -> PromptFuture<'a> {
        let text = text.to_string();
        Box::pin(async move {
            debug!(prompt = %text, "waiting for terminal input");
            let joined = tokio::task::spawn_blocking(move || {
                let stdin = io::stdin();
                let stdout = io::stdout();
                PromptSession::new(stdin.lock(), stdout.lock()).ask(&text)
            })
            .await;
            joined.unwrap_or_else(|e| {
                warn!(error = %e, "prompt task did not complete");
                String::new()
            })
        })
    }
}
