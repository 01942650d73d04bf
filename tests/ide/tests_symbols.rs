//! Document symbol tests.

use idlsense::hir::SymbolKind;
use idlsense::ide::Analysis;

use crate::helpers::document_helpers::document_set;
use crate::helpers::source_fixtures::*;

#[test]
fn test_outline_of_service_file() {
    let documents = document_set(&[("users.thrift", USER_SERVICE)]);
    let outline = Analysis::new(&documents).document_symbols("users.thrift");

    assert_eq!(outline.len(), 6);
    let role = &outline[2];
    assert_eq!(role.kind, SymbolKind::Enum);
    assert_eq!(role.children.len(), 2);

    let service = &outline[5];
    let methods: Vec<_> = service.children.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(methods, vec!["getUser", "touch"]);
    assert_eq!(service.children[0].children.len(), 2);
}

#[test]
fn test_outline_of_scope() {
    let documents = document_set(&[("events.frugal", EVENTS_SCOPE)]);
    let outline = Analysis::new(&documents).document_symbols("events.frugal");
    let operations: Vec<_> = outline[1]
        .children
        .iter()
        .map(|o| (o.name.as_str(), o.kind))
        .collect();
    assert_eq!(
        operations,
        vec![("Created", SymbolKind::Operation), ("Deleted", SymbolKind::Operation)]
    );
}
