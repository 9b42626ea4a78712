//! Error taxonomy for the hook dispatch boundary.
//!
//! All three variants are caught at the dispatch boundary, logged with
//! enough context for post-hoc debugging, and converted to the safest
//! default (the empty permissive response). The one exception to fail-open
//! lives in the dispatcher itself: an already-computed deny is never
//! downgraded by error handling.

use thiserror::Error;

/// Failures that can surface while processing one hook invocation.
#[derive(Debug, Error)]
pub enum HookError {
    /// Malformed JSON on the input channel.
    #[error("failed to parse hook input: {source} (input: {snippet:?})")]
    InputParse {
        source: serde_json::Error,
        /// Bounded prefix of the raw input, for diagnostics.
        snippet: String,
    },

    /// A registered handler failed while computing its decision.
    #[error("handler for '{handler}' failed: {source}")]
    Handler {
        handler: &'static str,
        source: anyhow::Error,
    },

    /// The session-log collaborator failed to append a record.
    #[error("session log append failed: {0}")]
    SessionLog(#[from] std::io::Error),
}

impl HookError {
    /// Build an `InputParse` error, truncating the raw input to a
    /// log-friendly snippet.
    pub fn input_parse(source: serde_json::Error, raw: &str) -> Self {
        const MAX_SNIPPET: usize = 200;
        let snippet = if raw.len() > MAX_SNIPPET {
            let mut end = MAX_SNIPPET;
            while !raw.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &raw[..end])
        } else {
            raw.to_string()
        };
        HookError::InputParse { source, snippet }
    }
}
