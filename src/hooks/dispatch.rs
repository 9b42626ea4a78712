//! Hook dispatch engine.
//!
//! One event per process lifetime: parse the envelope, persist it, run the
//! matching handler, return the response. Transport and handler failures
//! fail open to the empty response; a computed deny is returned as-is and
//! is never downgraded by error handling.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::HookError;
use crate::guard::{HARD_DENY_REASON, HARD_DENY_SUBSTRINGS, classify, normalize};
use crate::session::{SessionEventRecord, SessionLog};

use super::event::{HookEnvelope, HookEvent, is_known_event};
use super::response::HookResponse;

/// Name of the shell-execution tool whose commands are classified.
const SHELL_TOOL: &str = "Bash";

/// Literal phrase that blocks a submitted prompt outright.
const PROMPT_DENY_PHRASE: &str = "delete all";

/// Routes one parsed envelope to its handler.
pub struct Dispatcher {
    session_log: Arc<dyn SessionLog>,
}

impl Dispatcher {
    pub fn new(session_log: Arc<dyn SessionLog>) -> Self {
        Self { session_log }
    }

    /// Dispatch one envelope: persist it, then compute the decision.
    ///
    /// The match is exhaustive over the closed event vocabulary, so adding
    /// an event kind is a compile-time-checked change.
    pub async fn dispatch(&self, envelope: &HookEnvelope) -> Result<HookResponse, HookError> {
        self.persist(envelope).await;

        match &envelope.event {
            HookEvent::PreToolUse {
                tool_name,
                tool_input,
            } => Ok(self.gate_tool_use(tool_name, tool_input)),
            HookEvent::UserPromptSubmit { prompt } => Ok(self.gate_prompt(prompt)),
            // Persist-only events.
            HookEvent::SessionStart { .. }
            | HookEvent::PostToolUse { .. }
            | HookEvent::Notification { .. }
            | HookEvent::Stop { .. }
            | HookEvent::SubagentStop { .. }
            | HookEvent::PreCompact { .. } => Ok(HookResponse::empty()),
        }
    }

    /// Best-effort append to the session log. Failure is logged and
    /// swallowed; persistence must never block the decision path.
    async fn persist(&self, envelope: &HookEnvelope) {
        let event_name = envelope.event.event_name();
        let payload = serde_json::to_value(envelope).unwrap_or(Value::Null);
        let record = SessionEventRecord::new(event_name, &envelope.session_id, payload);

        if let Err(e) = self.session_log.append(&record).await {
            warn!(
                "Failed to persist {} event for session '{}': {}",
                event_name, envelope.session_id, e
            );
        }
    }

    /// PreToolUse: classify shell commands; everything else passes.
    ///
    /// The catastrophic-deletion substrings are checked first, independent
    /// of the git classifier, and a deny from either path wins.
    fn gate_tool_use(&self, tool_name: &str, tool_input: &Value) -> HookResponse {
        if tool_name != SHELL_TOOL {
            return HookResponse::empty();
        }
        let Some(command) = tool_input.get("command").and_then(Value::as_str) else {
            return HookResponse::empty();
        };

        let normalized = normalize(command);
        if HARD_DENY_SUBSTRINGS.iter().any(|s| normalized.contains(s)) {
            warn!("Blocked catastrophic command: {}", normalized);
            return HookResponse::deny_tool(HARD_DENY_REASON);
        }

        let verdict = classify(command);
        if !verdict.allowed {
            let reason = verdict
                .reason
                .unwrap_or_else(|| "Blocked dangerous git command".to_string());
            warn!("Blocked tool call: {}", reason);
            return HookResponse::deny_tool(reason);
        }

        debug!("Allowed shell command: {}", normalized);
        HookResponse::empty()
    }

    /// UserPromptSubmit: block prompts that ask for wholesale deletion.
    fn gate_prompt(&self, prompt: &str) -> HookResponse {
        if prompt.contains(PROMPT_DENY_PHRASE) {
            warn!("Blocked prompt containing '{}'", PROMPT_DENY_PHRASE);
            return HookResponse::block_prompt(format!(
                "Prompt contains the phrase '{PROMPT_DENY_PHRASE}'; wholesale deletion requests must be issued manually"
            ));
        }
        HookResponse::empty()
    }
}

/// Process one hook invocation end to end.
///
/// `event_arg` is the event name from the invocation's first argument,
/// `raw_input` the accumulated stdin body. Every failure path converges on
/// the empty response: an unrecognized event name skips parsing and
/// persistence entirely, malformed JSON is logged with a bounded snippet,
/// and handler errors are caught at this boundary.
pub async fn run(
    event_arg: &str,
    raw_input: &str,
    session_log: Arc<dyn SessionLog>,
) -> HookResponse {
    if !is_known_event(event_arg) {
        debug!("Unrecognized hook event '{}', responding empty", event_arg);
        return HookResponse::empty();
    }

    let envelope: HookEnvelope = match serde_json::from_str(raw_input) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!("{}", HookError::input_parse(e, raw_input));
            return HookResponse::empty();
        }
    };

    if envelope.event.event_name() != event_arg {
        // Trust the envelope's own tag; the argument is advisory.
        warn!(
            "Hook event argument '{}' disagrees with envelope tag '{}'",
            event_arg,
            envelope.event.event_name()
        );
    }

    let dispatcher = Dispatcher::new(session_log);
    match dispatcher.dispatch(&envelope).await {
        Ok(response) => response,
        Err(e) => {
            warn!(
                "{}",
                HookError::Handler {
                    handler: envelope.event.event_name(),
                    source: e.into(),
                }
            );
            HookResponse::empty()
        }
    }
}
