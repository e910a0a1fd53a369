/// Pattern definitions for the triage tools
///
/// This module contains the fixed line patterns and marker literals used to
/// parse analyzer report lines and to recognize guardable print statements
/// in Dart source files.

use lazy_static::lazy_static;
use regex::Regex;

/// Substring marking a line as already guarded for debug-only execution
pub const GUARD_MARKER: &str = "kDebugMode";

/// Guard prefix emitted in front of a wrapped print statement
pub const GUARD_PREFIX: &str = "if (kDebugMode) ";

/// Keyword indicating the preceding line opens a conditional
pub const CONDITIONAL_KEYWORD: &str = "if";

/// Marker substring showing the guard-support import is already present
pub const FOUNDATION_IMPORT: &str = "package:flutter/foundation.dart";

/// The import line inserted when the foundation import is missing
pub const FOUNDATION_IMPORT_LINE: &str = "import 'package:flutter/foundation.dart';";

/// Syntactic prefix identifying an import statement line
pub const IMPORT_PREFIX: &str = "import ";

lazy_static! {
    /// One analyzer diagnostic per line: severity, message, location and code
    /// separated by `•`, each field captured non-greedily up to the next
    /// separator, whitespace tolerated around fields and around the line.
    pub static ref ISSUE_LINE: Regex =
        Regex::new(r"^\s*(info|warning|error)\s*•\s*(.+?)\s*•\s*(.+?)\s*•\s*(.+?)\s*$").unwrap();

    /// A print call at the start of a line, capturing the leading whitespace
    pub static ref PRINT_CALL: Regex = Regex::new(r"^(\s*)print\(").unwrap();
}

/// Check whether a line already carries the debug guard marker
pub fn has_guard_marker(line: &str) -> bool {
    line.contains(GUARD_MARKER)
}

/// Check whether a line opens a conditional block
///
/// Matches the original tool's loose containment check: any occurrence of the
/// keyword anywhere in the line counts.
pub fn opens_conditional(line: &str) -> bool {
    line.contains(CONDITIONAL_KEYWORD)
}

/// Check whether a line is an import statement
pub fn is_import_line(line: &str) -> bool {
    line.starts_with(IMPORT_PREFIX)
}
