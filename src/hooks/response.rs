//! Hook response types written back to the host.
//!
//! Field names follow the host protocol: camelCase for tool gating
//! (`permissionDecision`), a bare `decision`/`reason` pair for prompt
//! gating, and a literal `{}` when the hook has no opinion.

use serde::{Deserialize, Serialize};

/// Permission decision for a tool-gating response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Allow,
    Deny,
    Ask,
}

/// Decision marker for a prompt-gating response; the only value the host
/// understands is `block`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptDecision {
    Block,
}

/// The response written back to the host, one variant per event kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HookResponse {
    /// PreToolUse gating decision.
    ToolGate {
        #[serde(rename = "permissionDecision")]
        permission_decision: PermissionDecision,
        #[serde(
            rename = "permissionDecisionReason",
            skip_serializing_if = "Option::is_none"
        )]
        permission_decision_reason: Option<String>,
    },
    /// UserPromptSubmit gating decision.
    PromptGate {
        decision: PromptDecision,
        reason: String,
    },
    /// No opinion; serializes as `{}`.
    Empty {},
}

impl HookResponse {
    /// The empty, permissive response.
    pub fn empty() -> Self {
        HookResponse::Empty {}
    }

    /// Deny a tool call with a reason.
    pub fn deny_tool(reason: impl Into<String>) -> Self {
        HookResponse::ToolGate {
            permission_decision: PermissionDecision::Deny,
            permission_decision_reason: Some(reason.into()),
        }
    }

    /// Block a prompt with a reason.
    pub fn block_prompt(reason: impl Into<String>) -> Self {
        HookResponse::PromptGate {
            decision: PromptDecision::Block,
            reason: reason.into(),
        }
    }

    /// Whether this response blocks the operation it gates.
    pub fn is_blocking(&self) -> bool {
        match self {
            HookResponse::ToolGate {
                permission_decision,
                ..
            } => *permission_decision == PermissionDecision::Deny,
            HookResponse::PromptGate { .. } => true,
            HookResponse::Empty {} => false,
        }
    }

    /// The human-readable reason attached to a blocking response, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            HookResponse::ToolGate {
                permission_decision_reason,
                ..
            } => permission_decision_reason.as_deref(),
            HookResponse::PromptGate { reason, .. } => Some(reason.as_str()),
            HookResponse::Empty {} => None,
        }
    }
}
