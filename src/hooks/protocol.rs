//! Protocol adapters: generic JSON and legacy exit-code.
//!
//! Both adapters sit over the same dispatcher, so the two integration
//! shapes can never drift apart on the rule set. The generic protocol
//! signals blocking purely through the response fields and always exits 0;
//! the legacy protocol signals blocking purely through exit code 2, with
//! reason lines on the diagnostic stream.

use std::io::{self, Write};

use super::response::HookResponse;

/// Exit code the legacy protocol uses to block an operation.
pub const LEGACY_BLOCK_EXIT_CODE: i32 = 2;

/// Write the response as exactly one JSON line (generic protocol).
pub fn write_response_line<W: Write>(writer: &mut W, response: &HookResponse) -> io::Result<()> {
    let json = serde_json::to_string(response).map_err(io::Error::other)?;
    writeln!(writer, "{json}")
}

/// Map a response onto the legacy protocol's exit code: 2 blocks, 0
/// allows.
pub fn legacy_exit_code(response: &HookResponse) -> i32 {
    if response.is_blocking() {
        LEGACY_BLOCK_EXIT_CODE
    } else {
        0
    }
}

/// Write the legacy protocol's human-readable reason lines for a blocking
/// response. Non-blocking responses produce no output.
pub fn write_legacy_diagnostics<W: Write>(
    writer: &mut W,
    response: &HookResponse,
) -> io::Result<()> {
    if let Some(reason) = response.reason().filter(|_| response.is_blocking()) {
        writeln!(writer, "Blocked: {reason}")?;
        writeln!(
            writer,
            "This operation has been blocked to prevent potential data loss."
        )?;
        writeln!(
            writer,
            "If you need to run it, please do so manually in your terminal."
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_protocol_writes_one_line() {
        let mut out = Vec::new();
        write_response_line(&mut out, &HookResponse::deny_tool("force push")).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains(r#""permissionDecision":"deny""#));
    }

    #[test]
    fn empty_response_writes_empty_object_line() {
        let mut out = Vec::new();
        write_response_line(&mut out, &HookResponse::empty()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{}\n");
    }

    #[test]
    fn legacy_exit_codes() {
        assert_eq!(legacy_exit_code(&HookResponse::deny_tool("x")), 2);
        assert_eq!(legacy_exit_code(&HookResponse::block_prompt("x")), 2);
        assert_eq!(legacy_exit_code(&HookResponse::empty()), 0);
    }

    #[test]
    fn legacy_diagnostics_carry_the_reason() {
        let mut err = Vec::new();
        write_legacy_diagnostics(&mut err, &HookResponse::deny_tool("hard reset")).unwrap();

        let text = String::from_utf8(err).unwrap();
        assert!(text.contains("Blocked: hard reset"));
        assert!(text.contains("data loss"));
    }

    #[test]
    fn legacy_diagnostics_silent_on_allow() {
        let mut err = Vec::new();
        write_legacy_diagnostics(&mut err, &HookResponse::empty()).unwrap();
        assert!(err.is_empty());
    }
}
