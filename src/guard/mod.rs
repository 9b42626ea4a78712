//! Destructive-command detection for shell tool calls.
//!
//! The guard is deliberately narrow: it only has an opinion about git
//! commands (matched against a fixed, ordered table of dangerous shapes)
//! plus two compiled-in catastrophic-deletion substrings. Everything else
//! is allowed. A blocklist was chosen over a strict allowlist so that
//! legitimate novel invocations are never blocked; the residual risk of an
//! un-enumerated destructive form is an accepted tradeoff.

mod classify;
mod rules;

pub use classify::{Verdict, classify, normalize};
pub use rules::{DangerousRule, HARD_DENY_REASON, HARD_DENY_SUBSTRINGS, dangerous_rules};
