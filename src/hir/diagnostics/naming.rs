//! Naming conventions: PascalCase types, UPPER_SNAKE_CASE constants.

use crate::hir::symbols::SymbolKind;
use crate::syntax::Document;

use super::{Diagnostic, DiagnosticCollector, codes};

/// Starts uppercase, has at least one lowercase letter, and has no
/// underscores or whitespace.
pub fn is_pascal_case(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };
    first.is_ascii_uppercase()
        && name.chars().any(|c| c.is_ascii_lowercase())
        && !name.chars().any(|c| c == '_' || c.is_whitespace())
}

/// Uppercase letters and digits separated by single underscores, with no
/// leading or trailing underscore.
pub fn is_upper_snake_case(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        && !name.starts_with('_')
        && !name.ends_with('_')
        && !name.contains("__")
}

/// Warn about type-level definitions that are not PascalCase and constants
/// that are not UPPER_SNAKE_CASE.
pub fn naming_conventions(document: &Document) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new(document.uri());

    for symbol in document.symbols() {
        let message = if symbol.kind.is_type_level() && !is_pascal_case(&symbol.name) {
            format!(
                "{} name '{}' should be PascalCase",
                capitalize(symbol.kind.display()),
                symbol.name
            )
        } else if symbol.kind == SymbolKind::Const && !is_upper_snake_case(&symbol.name) {
            format!("Constant name '{}' should be UPPER_SNAKE_CASE", symbol.name)
        } else {
            continue;
        };
        collector.add(
            Diagnostic::warning(symbol.declaration_range, message)
                .with_code(codes::NAMING_CONVENTION),
        );
    }

    collector.into_diagnostics()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
