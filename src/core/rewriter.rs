/// Debug-print guard rewriting
///
/// This file contains the line-oriented rewrite applied to Dart source text:
/// wrapping unguarded print statements in `if (kDebugMode)` and inserting the
/// supporting foundation import when it is missing. Both transforms are pure,
/// idempotent and never fail on malformed input.

use crate::core::patterns::{
    has_guard_marker, is_import_line, opens_conditional, FOUNDATION_IMPORT,
    FOUNDATION_IMPORT_LINE, GUARD_PREFIX, PRINT_CALL,
};

/// Classification of one source line within its two-line window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// The line already carries the guard marker
    Guarded,
    /// An unguarded print statement eligible for wrapping
    Guardable,
    /// Everything else, including prints under a hand-written conditional
    Plain,
}

/// Classify a line given the immediately preceding original line
///
/// Classification consults nothing beyond this two-line window. A print
/// statement whose predecessor opens a conditional is treated as plain so
/// that hand-written guards are not wrapped a second time.
pub fn classify_line(line: &str, prev: Option<&str>) -> LineClass {
    if has_guard_marker(line) {
        return LineClass::Guarded;
    }

    if PRINT_CALL.is_match(line) {
        if prev.is_some_and(opens_conditional) {
            return LineClass::Plain;
        }
        return LineClass::Guardable;
    }

    LineClass::Plain
}

/// Insert the foundation import after the last existing import line
///
/// No-op when the import marker already occurs anywhere in the text, and
/// conservative when no import line exists at all: rather than guessing an
/// insertion point, the text is returned unchanged.
pub fn insert_foundation_import(source: &str) -> String {
    if source.contains(FOUNDATION_IMPORT) {
        return source.to_string();
    }

    let lines: Vec<&str> = source.split('\n').collect();

    let mut last_import = None;
    for (idx, line) in lines.iter().enumerate() {
        if is_import_line(line) {
            last_import = Some(idx);
        }
    }

    match last_import {
        Some(idx) => {
            let mut result: Vec<&str> = Vec::with_capacity(lines.len() + 1);
            result.extend_from_slice(&lines[..=idx]);
            result.push(FOUNDATION_IMPORT_LINE);
            result.extend_from_slice(&lines[idx + 1..]);
            result.join("\n")
        }
        None => source.to_string(),
    }
}

/// Wrap unguarded print statements in a debug-mode guard
///
/// Each guardable line becomes `{indent}if (kDebugMode) {trimmed}` on a
/// single line, preserving the original leading whitespace. The previous-line
/// context is always the original predecessor, not its rewritten form.
pub fn wrap_print_statements(source: &str) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut result: Vec<String> = Vec::with_capacity(lines.len());

    let mut prev: Option<&str> = None;
    for &line in &lines {
        match classify_line(line, prev) {
            LineClass::Guardable => {
                // Classification already matched the pattern, so the
                // leading-whitespace capture is present.
                let indent = PRINT_CALL
                    .captures(line)
                    .map(|caps| caps[1].to_string())
                    .unwrap_or_default();
                result.push(format!("{}{}{}", indent, GUARD_PREFIX, line.trim()));
            }
            LineClass::Guarded | LineClass::Plain => result.push(line.to_string()),
        }
        prev = Some(line);
    }

    result.join("\n")
}

/// Apply the full rewrite: import insertion first, then guard wrapping
///
/// Applying the rewrite to its own output is a no-op.
pub fn rewrite_source(source: &str) -> String {
    let with_import = insert_foundation_import(source);
    wrap_print_statements(&with_import)
}
