//! Diagnostic assertion helpers.

use idlsense::hir::{Diagnostic, Severity, check_document};

use super::document_helpers::thrift;

/// Get all diagnostics for a source string.
pub fn diagnostics_for(source: &str) -> Vec<Diagnostic> {
    check_document(&thrift(source))
}

/// Get only error-level diagnostics.
pub fn errors_for(source: &str) -> Vec<Diagnostic> {
    diagnostics_for(source)
        .into_iter()
        .filter(|d| d.severity == Severity::Error)
        .collect()
}

/// Diagnostics carrying the given code.
pub fn with_code(diagnostics: &[Diagnostic], code: &str) -> Vec<Diagnostic> {
    diagnostics
        .iter()
        .filter(|d| d.code.as_deref() == Some(code))
        .cloned()
        .collect()
}

/// Assert a source has no diagnostics at all.
pub fn assert_clean(source: &str) {
    let diagnostics = diagnostics_for(source);
    assert!(
        diagnostics.is_empty(),
        "Expected no diagnostics, got {}:\n{}",
        diagnostics.len(),
        diagnostics
            .iter()
            .map(|d| format!("  Line {}: {}", d.range.start.line + 1, d.message))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
