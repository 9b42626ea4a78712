//! Lifecycle hook dispatch for the host agent.
//!
//! The host fires one hook event per process invocation:
//! - the event name arrives as the first invocation argument
//! - the event envelope arrives as JSON on stdin
//! - the decision leaves as exactly one JSON line on stdout, or as an exit
//!   code under the legacy protocol
//!
//! Events that can block: PreToolUse (tool gating) and UserPromptSubmit
//! (prompt gating). Every other event is persisted to the session log and
//! answered with the empty response.

mod dispatch;
mod event;
mod protocol;
mod response;

pub use dispatch::{Dispatcher, run};
pub use event::{HookEnvelope, HookEvent, is_known_event};
pub use protocol::{legacy_exit_code, write_legacy_diagnostics, write_response_line};
pub use response::{HookResponse, PermissionDecision};
