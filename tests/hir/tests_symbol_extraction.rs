//! Symbol extraction tests.

use idlsense::Range;
use idlsense::hir::{SymbolKind, extract_symbols};

use crate::helpers::document_helpers::thrift;
use crate::helpers::source_fixtures::*;

#[test]
fn test_extracts_top_level_definitions_in_order() {
    let symbols = thrift(USER_SERVICE).symbols();
    let summary: Vec<_> = symbols.iter().map(|s| (s.name.as_str(), s.kind)).collect();
    assert_eq!(
        summary,
        vec![
            ("UserId", SymbolKind::Typedef),
            ("MAX_USERS", SymbolKind::Const),
            ("Role", SymbolKind::Enum),
            ("User", SymbolKind::Struct),
            ("NotFound", SymbolKind::Exception),
            ("UserService", SymbolKind::Service),
        ]
    );
}

#[test]
fn test_scope_symbol() {
    let symbols = thrift(EVENTS_SCOPE).symbols();
    assert_eq!(symbols[1].name, "Events");
    assert_eq!(symbols[1].kind, SymbolKind::Scope);
}

#[test]
fn test_ranges() {
    let symbols = thrift(SIMPLE_STRUCT).symbols();
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].declaration_range, Range::from_coords(0, 7, 0, 11));
    assert_eq!(symbols[0].full_range, Range::from_coords(0, 0, 3, 1));
}

#[test]
fn test_extraction_is_deterministic() {
    let document = thrift(USER_SERVICE);
    let root = document.tree().unwrap();
    let first = extract_symbols(&root, document.line_index());
    let second = extract_symbols(&root, document.line_index());
    assert_eq!(first, second);
    assert_eq!(first, thrift(USER_SERVICE).symbols());
}

#[test]
fn test_nameless_definitions_are_skipped() {
    let symbols = thrift("struct {}\nstruct Named {}").symbols();
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].name, "Named");
}

#[test]
fn test_symbol_node_points_back_to_definition() {
    let document = thrift(SIMPLE_STRUCT);
    let root = document.tree().unwrap();
    let symbol = &document.symbols()[0];
    assert_eq!(symbol.to_node(&root).text().to_string(), SIMPLE_STRUCT);
}
