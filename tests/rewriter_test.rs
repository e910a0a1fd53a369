/// Tests for the debug-print guard rewriter
///
/// These tests verify guard wrapping, import insertion, the two-line window
/// classification, idempotence, and the file round-trip boundary.

use dart_triage::core::rewriter::{
    classify_line, insert_foundation_import, rewrite_source, wrap_print_statements, LineClass,
};

#[test]
fn test_wraps_plain_print() {
    assert_eq!(
        wrap_print_statements("print('hello');"),
        "if (kDebugMode) print('hello');"
    );
}

#[test]
fn test_wrapping_preserves_indentation() {
    assert_eq!(
        wrap_print_statements("    print('x');"),
        "    if (kDebugMode) print('x');"
    );
}

#[test]
fn test_already_guarded_line_is_untouched() {
    let line = "if (kDebugMode) print('x');";
    assert_eq!(wrap_print_statements(line), line);
}

#[test]
fn test_print_after_conditional_is_untouched() {
    let source = "\
void main() {
  if (verbose) {
    print('hand guarded');
  }
}
";
    assert_eq!(wrap_print_statements(source), source);
}

#[test]
fn test_any_if_substring_on_previous_line_suppresses_wrapping() {
    // The previous-line check is plain containment, so even a word like
    // "verify" counts as opening a conditional.
    let source = "// verify the output\nprint('x');";
    assert_eq!(wrap_print_statements(source), source);
}

#[test]
fn test_mid_line_print_is_not_wrapped() {
    // Only a print call at the start of the line (after indentation) matches
    let source = "var logger = () => print('x');";
    assert_eq!(wrap_print_statements(source), source);
}

#[test]
fn test_import_inserted_after_last_import() {
    let source = "\
import 'dart:async';
import 'package:flutter/material.dart';

void main() {}
";
    let expected = "\
import 'dart:async';
import 'package:flutter/material.dart';
import 'package:flutter/foundation.dart';

void main() {}
";
    assert_eq!(insert_foundation_import(source), expected);
}

#[test]
fn test_import_not_duplicated() {
    let source = "\
import 'package:flutter/foundation.dart';

void main() {}
";
    assert_eq!(insert_foundation_import(source), source);
}

#[test]
fn test_no_import_line_means_no_insertion() {
    // Without any import statement there is no insertion point to trust,
    // but guard wrapping still proceeds.
    let source = "\
void main() {
  print('hi');
}
";
    let expected = "\
void main() {
  if (kDebugMode) print('hi');
}
";
    assert_eq!(rewrite_source(source), expected);
}

#[test]
fn test_full_rewrite() {
    let source = "\
import 'package:flutter/material.dart';

void main() {
  print('boot');
  if (kDebugMode) print('already fine');
}
";
    let expected = "\
import 'package:flutter/material.dart';
import 'package:flutter/foundation.dart';

void main() {
  if (kDebugMode) print('boot');
  if (kDebugMode) print('already fine');
}
";
    assert_eq!(rewrite_source(source), expected);
}

#[test]
fn test_rewrite_is_idempotent() {
    let source = "\
import 'package:flutter/material.dart';

void main() {
  print('boot');
  if (enabled) {
    print('hand guarded');
  }
}
";
    let once = rewrite_source(source);
    let twice = rewrite_source(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_empty_source_passes_through() {
    assert_eq!(rewrite_source(""), "");
}

#[test]
fn test_classify_two_line_window() {
    assert_eq!(classify_line("print('x');", None), LineClass::Guardable);
    assert_eq!(
        classify_line("  print('x');", Some("void main() {")),
        LineClass::Guardable
    );
    assert_eq!(
        classify_line("  print('x');", Some("  if (cond) {")),
        LineClass::Plain
    );
    assert_eq!(
        classify_line("if (kDebugMode) print('x');", None),
        LineClass::Guarded
    );
    assert_eq!(classify_line("var a = 1;", None), LineClass::Plain);
}

#[test]
fn test_guard_file_round_trip() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let dart_path = temp_dir.path().join("main.dart");
    std::fs::write(
        &dart_path,
        "import 'package:flutter/material.dart';\n\nvoid main() {\n  print('boot');\n}\n",
    )
    .expect("Failed to write dart file");

    // First pass rewrites the file on disk
    let changed = dart_triage::guard_file(&dart_path).expect("Failed to guard file");
    assert!(changed);

    let content = std::fs::read_to_string(&dart_path).expect("Failed to read dart file");
    assert!(content.contains("import 'package:flutter/foundation.dart';"));
    assert!(content.contains("  if (kDebugMode) print('boot');"));

    // Second pass is a no-op
    let changed_again = dart_triage::guard_file(&dart_path).expect("Failed to guard file");
    assert!(!changed_again);

    let content_again = std::fs::read_to_string(&dart_path).expect("Failed to read dart file");
    assert_eq!(content, content_again);
}

#[test]
fn test_batch_continues_past_failed_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let good = temp_dir.path().join("good.dart");
    let missing = temp_dir.path().join("missing.dart");
    std::fs::write(&good, "void main() {\n  print('hi');\n}\n").expect("Failed to write file");

    let outcomes = dart_triage::app::guard_files(&[missing.clone(), good.clone()]);

    // The failure is confined to its own file; the next file still rewrites
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].1.is_err());
    assert!(matches!(outcomes[1].1, Ok(true)));

    let content = std::fs::read_to_string(&good).expect("Failed to read file");
    assert!(content.contains("if (kDebugMode) print('hi');"));
}

#[test]
fn test_guard_file_missing_path_reports_cause() {
    let err = dart_triage::guard_file("no/such/file.dart").expect_err("Missing file should fail");
    let message = err.to_string();
    assert!(message.contains("no/such/file.dart"));
    assert!(message.contains("failed to read"));
}
