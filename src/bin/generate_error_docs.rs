//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `InputError` via its `code()`, `description()`, `details()`,
//! and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;

use crossgrid::errors::InputError;

/// Every `InputError` variant, with representative payloads
fn all_input_error_variants() -> Vec<InputError> {
    vec![
        InputError::EmptyWordList,
        InputError::ReadFailure {
            path: "words.txt".to_string(),
            reason: "No such file or directory (os error 2)".to_string(),
        },
        // Serialization--create by parsing invalid JSON
        InputError::Serialization(
            serde_json::from_str::<Vec<u8>>("[1,").expect_err("truncated JSON must not parse"),
        ),
    ]
}

fn render_docs() -> String {
    let mut out = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**This document is auto-generated from the source code. Do not edit manually.**\n");
    let _ = writeln!(out, "## Input Errors\n");
    let _ = writeln!(out, "Errors raised while collecting words or writing the grid. The placement engine itself never fails.\n");

    for error in all_input_error_variants() {
        let _ = writeln!(out, "### {}: {}\n", error.code(), error.description());
        let _ = writeln!(out, "**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            let _ = writeln!(out, "**How to fix:**\n```\n{help_text}\n```\n");
        }

        let _ = writeln!(out, "**Example error message:**\n```\n{error}\n```\n");
        let _ = writeln!(out, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed());
        let _ = writeln!(out, "---\n");
    }

    out
}

fn main() {
    print!("{}", render_docs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_documented_once() {
        let docs = render_docs();
        for error in all_input_error_variants() {
            let heading = format!("### {}:", error.code());
            assert_eq!(docs.matches(&heading).count(), 1, "{heading} should appear exactly once");
        }
    }

    #[test]
    fn test_help_only_for_variants_that_have_it() {
        let docs = render_docs();
        let with_help = all_input_error_variants().iter().filter(|e| e.help().is_some()).count();
        assert_eq!(docs.matches("**How to fix:**").count(), with_help);
    }
}
