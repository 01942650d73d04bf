//! Duplicate definitions and duplicate members.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::Range;
use crate::hir::symbols::{SymbolKind, declared_name};
use crate::parser::{AstNode, EnumDef, Name, ServiceDef, SyntaxNode};
use crate::syntax::Document;

use super::{Diagnostic, DiagnosticCollector, codes};

/// Report every definition whose `(kind, name)` was already defined.
///
/// Each report is related to the first definition in traversal order.
pub fn duplicate_definitions(document: &Document) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new(document.uri());
    let mut seen: FxHashMap<(SymbolKind, SmolStr), Range> = FxHashMap::default();

    for symbol in document.symbols() {
        let key = (symbol.kind, symbol.name.clone());
        match seen.get(&key) {
            Some(&first) => collector.duplicate(
                codes::DUPLICATE_DEFINITION,
                symbol.declaration_range,
                format!(
                    "Duplicate {} definition '{}'",
                    symbol.kind.display(),
                    symbol.name
                ),
                first,
                format!("First definition of '{}'", symbol.name),
            ),
            None => {
                seen.insert(key, symbol.declaration_range);
            }
        }
    }

    collector.into_diagnostics()
}

/// Report repeated value names within one enum and repeated method names
/// within one service.
pub fn duplicate_members(document: &Document) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new(document.uri());
    let Some(root) = document.tree() else {
        return Vec::new();
    };

    for node in root.descendants() {
        if let Some(enum_def) = EnumDef::cast(node.clone()) {
            let names = enum_def.values().filter_map(|value| value.name());
            check_members(document, &mut collector, &node, SymbolKind::EnumValue, names);
        } else if let Some(service) = ServiceDef::cast(node.clone()) {
            let names = service.functions().filter_map(|function| function.name());
            check_members(document, &mut collector, &node, SymbolKind::Method, names);
        }
    }

    collector.into_diagnostics()
}

fn check_members(
    document: &Document,
    collector: &mut DiagnosticCollector,
    parent: &SyntaxNode,
    member_kind: SymbolKind,
    names: impl Iterator<Item = Name>,
) {
    let Some(parent_kind) = SymbolKind::from_definition(parent.kind()) else {
        return;
    };
    let parent_name = declared_name(parent)
        .map(|name| name.text())
        .unwrap_or_default();

    let mut seen: FxHashMap<String, Range> = FxHashMap::default();
    for name in names {
        let text = name.text();
        let range = document.node_range(name.syntax());
        match seen.get(&text) {
            Some(&first) => collector.duplicate(
                codes::DUPLICATE_MEMBER,
                range,
                format!(
                    "Duplicate {} '{}' in {} '{}'",
                    member_kind.display(),
                    text,
                    parent_kind.display(),
                    parent_name
                ),
                first,
                format!("First definition of '{}'", text),
            ),
            None => {
                seen.insert(text, range);
            }
        }
    }
}
