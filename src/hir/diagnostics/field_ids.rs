//! Field id validation.
//!
//! Ids are unique per namespace: each struct, union or exception body is one
//! namespace, and each function owns two, its parameters and its throws
//! clause. The same id may appear once in each.

use rowan::Direction;
use rustc_hash::FxHashMap;

use crate::base::Range;
use crate::hir::symbols::{SymbolKind, declared_name};
use crate::parser::{AstNode, FieldList, SyntaxKind, SyntaxNode};
use crate::syntax::Document;

use super::{Diagnostic, DiagnosticCollector, codes};

/// Report repeated ids within a namespace and ids below 1.
///
/// Ids that do not parse as a decimal integer are skipped.
pub fn field_ids(document: &Document) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new(document.uri());
    let Some(root) = document.tree() else {
        return Vec::new();
    };

    for list in root.descendants().filter_map(FieldList::cast) {
        let Some(namespace) = namespace_label(list.syntax()) else {
            continue;
        };
        check_namespace(document, &mut collector, &list, &namespace);
    }

    collector.into_diagnostics()
}

fn check_namespace(
    document: &Document,
    collector: &mut DiagnosticCollector,
    list: &FieldList,
    namespace: &str,
) {
    let mut seen: FxHashMap<i64, Range> = FxHashMap::default();

    for field_id in list.fields().filter_map(|field| field.field_id()) {
        let Some(token) = field_id.token() else {
            continue;
        };
        let Some(value) = field_id.value() else {
            tracing::trace!(id = token.text(), "skipping unparsable field id");
            continue;
        };
        let range = document.range(token.text_range());

        if value < 1 {
            collector.add(
                Diagnostic::error(range, format!("Field ID must be positive, got {value}"))
                    .with_code(codes::NON_POSITIVE_FIELD_ID),
            );
        }

        match seen.get(&value) {
            Some(&first) => collector.duplicate(
                codes::DUPLICATE_FIELD_ID,
                range,
                format!("Duplicate field ID {value} in {namespace}"),
                first,
                format!("Field ID {value} first used here"),
            ),
            None => {
                seen.insert(value, range);
            }
        }
    }
}

/// Describe the namespace a field list forms, e.g. `struct 'User'` or
/// `throws of 'getUser'`. `None` for lists with no owner.
fn namespace_label(list: &SyntaxNode) -> Option<String> {
    let owner = list.parent()?;
    let name = declared_name(&owner)
        .map(|name| name.text())
        .unwrap_or_default();

    if owner.kind() == SyntaxKind::FUNCTION_DEF {
        let after_throws = list
            .siblings_with_tokens(Direction::Prev)
            .any(|element| element.kind() == SyntaxKind::THROWS_KW);
        let part = if after_throws { "throws" } else { "parameters" };
        return Some(format!("{part} of '{name}'"));
    }

    let kind = SymbolKind::from_definition(owner.kind())?;
    Some(format!("{} '{}'", kind.display(), name))
}
