//! HookGuard — command-safety hook engine for coding agents.
//!
//! HookGuard sits between an autonomous coding agent and the shell it
//! drives. The host invokes it once per lifecycle event, piping the event
//! envelope as JSON to stdin and naming the event in the first argument.
//! HookGuard persists the event, classifies any embedded shell command
//! against a fixed table of destructive git-command patterns, and writes
//! its decision back as a single JSON line (or as an exit code under the
//! legacy protocol).
//!
//! The crate is split into:
//! - [`guard`]: the pure command classifier and its rule table
//! - [`hooks`]: event/response model, dispatcher, and protocol adapters
//! - [`session`]: the append-only session event log

pub mod error;
pub mod guard;
pub mod hooks;
pub mod session;

pub use error::HookError;
pub use guard::{Verdict, classify};
pub use hooks::{HookEnvelope, HookEvent, HookResponse};
pub use session::{JsonlSessionLog, SessionLog};
