//! Hook event types for the lifecycle hook system.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The envelope the host writes to stdin: common session fields plus the
/// event payload, tagged inline by `hook_event_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookEnvelope {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub transcript_path: String,
    #[serde(flatten)]
    pub event: HookEvent,
}

/// The closed vocabulary of lifecycle events fired by the host agent.
///
/// Adding a variant is a compile-time-checked change: the dispatcher
/// matches exhaustively, so a new event cannot silently fall through.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "hook_event_name")]
pub enum HookEvent {
    /// Fired when a session is created or resumed.
    SessionStart {
        #[serde(default)]
        source: String,
    },
    /// Fired before a tool executes. Can block execution.
    PreToolUse {
        tool_name: String,
        #[serde(default)]
        tool_input: Value,
    },
    /// Fired after a tool completes (read-only).
    PostToolUse {
        tool_name: String,
        #[serde(default)]
        tool_input: Value,
        #[serde(default)]
        tool_response: Value,
    },
    /// Fired when the host surfaces a notification to the user.
    Notification {
        #[serde(default)]
        message: String,
    },
    /// Fired when the main agent finishes responding.
    Stop {
        #[serde(default)]
        stop_hook_active: bool,
    },
    /// Fired when a subagent finishes responding.
    SubagentStop {
        #[serde(default)]
        stop_hook_active: bool,
    },
    /// Fired when a user prompt is submitted. Can block the prompt.
    UserPromptSubmit { prompt: String },
    /// Fired before the host compacts the conversation context.
    PreCompact {
        #[serde(default)]
        trigger: String,
        #[serde(default)]
        custom_instructions: String,
    },
}

impl HookEvent {
    /// Get the event name as a string (matches the `hook_event_name` tag).
    pub fn event_name(&self) -> &'static str {
        match self {
            HookEvent::SessionStart { .. } => "SessionStart",
            HookEvent::PreToolUse { .. } => "PreToolUse",
            HookEvent::PostToolUse { .. } => "PostToolUse",
            HookEvent::Notification { .. } => "Notification",
            HookEvent::Stop { .. } => "Stop",
            HookEvent::SubagentStop { .. } => "SubagentStop",
            HookEvent::UserPromptSubmit { .. } => "UserPromptSubmit",
            HookEvent::PreCompact { .. } => "PreCompact",
        }
    }

    /// Whether this event type can block the operation it describes.
    pub fn is_gating(&self) -> bool {
        matches!(
            self,
            HookEvent::PreToolUse { .. } | HookEvent::UserPromptSubmit { .. }
        )
    }
}

/// Whether an event name from the invocation arguments belongs to the
/// closed vocabulary. Unrecognized names take the empty-response path
/// without touching any handler or the session log.
pub fn is_known_event(name: &str) -> bool {
    matches!(
        name,
        "SessionStart"
            | "PreToolUse"
            | "PostToolUse"
            | "Notification"
            | "Stop"
            | "SubagentStop"
            | "UserPromptSubmit"
            | "PreCompact"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_deserializes_pre_tool_use() {
        let raw = json!({
            "session_id": "abc-123",
            "transcript_path": "/tmp/transcript.jsonl",
            "hook_event_name": "PreToolUse",
            "tool_name": "Bash",
            "tool_input": {"command": "git status"}
        });

        let envelope: HookEnvelope = serde_json::from_value(raw).unwrap();
        assert_eq!(envelope.session_id, "abc-123");
        match &envelope.event {
            HookEvent::PreToolUse {
                tool_name,
                tool_input,
            } => {
                assert_eq!(tool_name, "Bash");
                assert_eq!(tool_input["command"], "git status");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn envelope_tolerates_missing_optional_fields() {
        let raw = json!({
            "hook_event_name": "Stop"
        });

        let envelope: HookEnvelope = serde_json::from_value(raw).unwrap();
        assert!(envelope.session_id.is_empty());
        match envelope.event {
            HookEvent::Stop { stop_hook_active } => assert!(!stop_hook_active),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn unknown_event_name_fails_to_parse() {
        let raw = json!({
            "session_id": "abc",
            "hook_event_name": "TotallyNewEvent"
        });

        assert!(serde_json::from_value::<HookEnvelope>(raw).is_err());
    }

    #[test]
    fn event_name_round_trips_through_tag() {
        let envelope: HookEnvelope = serde_json::from_value(json!({
            "hook_event_name": "UserPromptSubmit",
            "prompt": "hello"
        }))
        .unwrap();
        assert_eq!(envelope.event.event_name(), "UserPromptSubmit");
    }

    #[test]
    fn gating_events() {
        let pre: HookEnvelope = serde_json::from_value(json!({
            "hook_event_name": "PreToolUse",
            "tool_name": "Bash"
        }))
        .unwrap();
        assert!(pre.event.is_gating());

        let post: HookEnvelope = serde_json::from_value(json!({
            "hook_event_name": "PostToolUse",
            "tool_name": "Bash"
        }))
        .unwrap();
        assert!(!post.event.is_gating());
    }

    #[test]
    fn known_event_vocabulary_is_closed() {
        for name in [
            "SessionStart",
            "PreToolUse",
            "PostToolUse",
            "Notification",
            "Stop",
            "SubagentStop",
            "UserPromptSubmit",
            "PreCompact",
        ] {
            assert!(is_known_event(name), "{name} should be known");
        }
        assert!(!is_known_event("TotallyNewEvent"));
        assert!(!is_known_event(""));
    }
}
