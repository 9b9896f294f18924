//! Terminal port for line-oriented prompts.

use std::future::Future;
use std::pin::Pin;

/// Boxed future type alias used by [`Terminal`]. Prompts never fail.
pub type PromptFuture<'a> = Pin<Box<dyn Future<Output = String> + Send + 'a>>;

/// Asks the user for one line of input.
///
/// The terminal input channel is exclusive: callers must not have two
/// prompts in flight at once.
pub trait Terminal: Send + Sync {
    /// Writes `text` followed by a space, then resolves with the next line
    /// typed by the user, terminator stripped and otherwise untouched.
    fn prompt<'a>(&'a self, text: &'a str) -> PromptFuture<'a>;
}
