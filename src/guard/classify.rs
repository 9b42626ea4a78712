//! Command classification against the dangerous-pattern table.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use super::rules::{dangerous_rules, safe_rules};

/// Word-bounded `git` token; commands without it are out of scope.
static GIT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bgit\b").expect("compiled-in git token pattern must be valid"));

/// Outcome of classifying one command string.
///
/// A deny always carries a non-empty reason; an allow never needs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub allowed: bool,
    pub reason: Option<String>,
}

impl Verdict {
    /// Allow the command, with no opinion attached.
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    /// Deny the command with a reason.
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Collapse internal whitespace and trim. Idempotent; the caller's string
/// is never mutated.
pub fn normalize(command: &str) -> String {
    command.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Classify a shell command against the dangerous git pattern table.
///
/// Non-git commands are always allowed; the guard is intentionally narrow.
/// Evaluation over the table is first-match-wins, so the reported reason
/// for a command matching several rules is determined by table order.
/// Unknown git forms are allowed with a non-blocking diagnostic — the
/// guard fails open rather than second-guessing novel invocations.
pub fn classify(command: &str) -> Verdict {
    if command.trim().is_empty() {
        return Verdict::allow();
    }

    let normalized = normalize(command);

    if !GIT_TOKEN.is_match(&normalized) {
        return Verdict::allow();
    }

    for rule in dangerous_rules() {
        if rule.pattern.is_match(&normalized) {
            return Verdict::deny(format!("Blocked dangerous git command: {}", rule.reason));
        }
    }

    // Not dangerous, but flag unfamiliar git forms for the operator.
    let is_familiar = safe_rules().iter().any(|p| p.is_match(&normalized));
    if !is_familiar {
        warn!("Unfamiliar git command - please review carefully: {}", normalized);
    }

    Verdict::allow()
}
