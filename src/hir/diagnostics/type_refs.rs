//! Type reference resolution against the known types of one document.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::parser::keywords::{BUILTIN_TYPES, CONTAINER_TYPES};
use crate::parser::{AstNode, FieldType};
use crate::syntax::Document;

use super::{Diagnostic, DiagnosticCollector, codes};

/// Builtin and container type names, `extra` names, and every struct,
/// union, exception, enum and typedef the document defines.
pub fn known_types(document: &Document, extra: &[String]) -> FxHashSet<SmolStr> {
    let mut known: FxHashSet<SmolStr> = BUILTIN_TYPES
        .iter()
        .chain(CONTAINER_TYPES)
        .map(|name| SmolStr::new(name))
        .collect();
    known.extend(extra.iter().map(SmolStr::new));
    known.extend(
        document
            .symbols()
            .into_iter()
            .filter(|symbol| symbol.kind.is_type())
            .map(|symbol| symbol.name),
    );
    known
}

/// Report field types whose name is not a known type.
///
/// Container types are not names themselves; their element types are
/// checked on their own. Qualified names like `shared.User` point into
/// included documents and are skipped.
pub fn unknown_types(document: &Document, extra: &[String]) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new(document.uri());
    let Some(root) = document.tree() else {
        return Vec::new();
    };
    let known = known_types(document, extra);

    for field_type in root.descendants().filter_map(FieldType::cast) {
        if field_type.is_container() {
            continue;
        }
        let Some(name) = field_type.name() else {
            continue;
        };
        if name.is_qualified() {
            continue;
        }
        let text = name.text();
        if !known.contains(text.as_str()) {
            collector.add(
                Diagnostic::error(
                    document.node_range(name.syntax()),
                    format!("Unknown type '{text}'"),
                )
                .with_code(codes::UNKNOWN_TYPE),
            );
        }
    }

    collector.into_diagnostics()
}
