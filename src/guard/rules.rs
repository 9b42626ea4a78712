// Compiled-in deny defaults for shell command filtering.
// The table is ordered: classification is first-match-wins, so the
// reported reason for a command matching several rules is the earliest.

use once_cell::sync::Lazy;
use regex::Regex;

/// One destructive git command shape: a pattern plus the human-readable
/// reason reported when it matches.
#[derive(Debug)]
pub struct DangerousRule {
    pub pattern: Regex,
    pub reason: &'static str,
}

/// Catastrophic-deletion substrings — checked by the PreToolUse handler as
/// an independent safety net, on top of the git rule table.
pub const HARD_DENY_SUBSTRINGS: &[&str] = &["rm -rf /", "rm -rf ~"];

/// Fixed reason attached to a hard-deny substring match.
pub const HARD_DENY_REASON: &str =
    "Blocked catastrophic deletion command (rm -rf on root or home)";

/// Ordered (pattern, reason) source for the dangerous rule table.
///
/// The `branch -D` pattern is the only case-sensitive one: `branch -d` is a
/// safe delete and must not be flagged.
const DANGEROUS_PATTERNS: &[(&str, &str)] = &[
    // Force push variations
    (
        r"(?i)git\s+push\s+.*--force(\s|$)",
        "force push without --force-with-lease",
    ),
    (
        r"(?i)git\s+push\s+(?:.*\s)?-f(\s|$)",
        "force push (-f) without lease",
    ),
    // Hard reset
    (
        r"(?i)git\s+reset\s+--hard",
        "hard reset (destroys uncommitted changes)",
    ),
    // Clean untracked files (flags may be clustered, e.g. -fd, -xdf)
    (
        r"(?i)git\s+clean\s+.*-[a-z]*f",
        "clean -f (removes untracked files)",
    ),
    (
        r"(?i)git\s+clean\s+.*-[a-z]*d",
        "clean -d (removes untracked directories)",
    ),
    // Force delete branch
    (
        r"(?i:git\s+branch\s+).*-D",
        "force delete branch (-D)",
    ),
    // Rewrite history commands
    (
        r"(?i)git\s+rebase\s+.*-i",
        "interactive rebase (can rewrite history)",
    ),
    (
        r"(?i)git\s+filter-branch",
        "filter-branch (rewrites history)",
    ),
    (
        r"(?i)git\s+reflog\s+expire",
        "reflog expire (removes recovery points)",
    ),
    // Aggressive garbage collection
    (
        r"(?i)git\s+gc\s+.*--prune=now",
        "aggressive garbage collection",
    ),
    // Checkout force
    (
        r"(?i)git\s+checkout\s+.*--force",
        "force checkout (discards local changes)",
    ),
    (
        r"(?i)git\s+checkout\s+.*-f(\s|$)",
        "force checkout (-f)",
    ),
    // Stash drop/clear
    (
        r"(?i)git\s+stash\s+drop",
        "stash drop (permanently removes stash)",
    ),
    (
        r"(?i)git\s+stash\s+clear",
        "stash clear (removes all stashes)",
    ),
    // Update-ref delete
    (
        r"(?i)git\s+update-ref\s+-d",
        "update-ref -d (deletes references)",
    ),
    // Replace
    (
        r"(?i)git\s+replace",
        "replace (creates replacement objects)",
    ),
];

/// Safe git verbs used only for non-blocking diagnostics: a git command
/// that survives the dangerous table but matches none of these gets a
/// "review carefully" warning. Dangerous forms (branch -D, stash drop, …)
/// never reach this check, so plain verb patterns suffice.
const SAFE_PATTERNS: &[&str] = &[
    r"(?i)git\s+status",
    r"(?i)git\s+log",
    r"(?i)git\s+diff",
    r"(?i)git\s+show",
    r"(?i)git\s+branch",
    r"(?i)git\s+add",
    r"(?i)git\s+commit",
    r"(?i)git\s+push",
    r"(?i)git\s+pull",
    r"(?i)git\s+fetch",
    r"(?i)git\s+checkout",
    r"(?i)git\s+merge",
    r"(?i)git\s+rebase",
    r"(?i)git\s+stash",
    r"(?i)git\s+tag",
    r"(?i)git\s+remote",
    r"(?i)git\s+config",
    r"(?i)git\s+clone",
    r"(?i)git\s+init",
];

static DANGEROUS_RULES: Lazy<Vec<DangerousRule>> = Lazy::new(|| {
    DANGEROUS_PATTERNS
        .iter()
        .map(|(pattern, reason)| DangerousRule {
            pattern: Regex::new(pattern).expect("compiled-in dangerous pattern must be valid"),
            reason,
        })
        .collect()
});

static SAFE_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    SAFE_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("compiled-in safe pattern must be valid"))
        .collect()
});

/// The dangerous rule table, compiled once per process.
pub fn dangerous_rules() -> &'static [DangerousRule] {
    &DANGEROUS_RULES
}

/// The safe-verb allowlist, compiled once per process.
pub(crate) fn safe_rules() -> &'static [Regex] {
    &SAFE_RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_dangerous_patterns_compile() {
        for (p, _) in DANGEROUS_PATTERNS {
            assert!(Regex::new(p).is_ok(), "Failed to compile: {}", p);
        }
        assert_eq!(dangerous_rules().len(), DANGEROUS_PATTERNS.len());
    }

    #[test]
    fn all_safe_patterns_compile() {
        for p in SAFE_PATTERNS {
            assert!(Regex::new(p).is_ok(), "Failed to compile: {}", p);
        }
    }

    #[test]
    fn hard_deny_substrings_not_empty() {
        assert!(!HARD_DENY_SUBSTRINGS.is_empty());
    }

    #[test]
    fn force_push_pattern_spares_lease() {
        let rule = &dangerous_rules()[0];
        assert!(rule.pattern.is_match("git push origin main --force"));
        assert!(!rule.pattern.is_match("git push origin main --force-with-lease"));
    }

    #[test]
    fn branch_delete_pattern_is_case_sensitive() {
        let rule = dangerous_rules()
            .iter()
            .find(|r| r.reason.contains("force delete branch"))
            .unwrap();
        assert!(rule.pattern.is_match("git branch -D feature-x"));
        assert!(!rule.pattern.is_match("git branch -d feature-x"));
    }

    #[test]
    fn clean_pattern_matches_clustered_flags() {
        let clean_f = &dangerous_rules()[3];
        assert!(clean_f.pattern.is_match("git clean -fd"));
        assert!(clean_f.pattern.is_match("git clean -xdf"));
        assert!(!clean_f.pattern.is_match("git clean -n"));
    }
}
