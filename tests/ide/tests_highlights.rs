//! Document highlight tests.

use idlsense::ide::{HighlightKind, document_highlights};

use crate::helpers::document_helpers::{position_of, thrift};
use crate::helpers::source_fixtures::*;

#[test]
fn test_write_and_read_highlights() {
    let document = thrift(USER_SERVICE);
    let highlights = document_highlights(&document, position_of(USER_SERVICE, "NotFound", 1));
    let kinds: Vec<_> = highlights.iter().map(|h| h.kind).collect();
    assert_eq!(
        kinds,
        vec![HighlightKind::Write, HighlightKind::Read]
    );
}

#[test]
fn test_field_names_match_across_structs() {
    let source = "struct A {\n  1: string name\n}\nstruct B {\n  1: string name\n}";
    let highlights = document_highlights(&thrift(source), position_of(source, "name", 0));
    assert_eq!(highlights.len(), 2);
    assert!(highlights.iter().all(|h| h.kind == HighlightKind::Write));
}

#[test]
fn test_highlights_inside_broken_source() {
    let source = "struct User {}\n= User";
    let highlights = document_highlights(&thrift(source), position_of(source, "User", 0));
    let kinds: Vec<_> = highlights.iter().map(|h| h.kind).collect();
    assert_eq!(kinds, vec![HighlightKind::Write, HighlightKind::Text]);
}

#[test]
fn test_qualified_segment_is_a_read() {
    let source = "enum Role {\n  ADMIN = 1\n}\nconst Role DEFAULT = Role.ADMIN";
    let highlights = document_highlights(&thrift(source), position_of(source, "Role", 0));
    let kinds: Vec<_> = highlights.iter().map(|h| h.kind).collect();
    assert_eq!(
        kinds,
        vec![HighlightKind::Write, HighlightKind::Read, HighlightKind::Read]
    );
    assert_eq!(highlights[2].range, idlsense::Range::from_coords(3, 21, 3, 25));
}

#[test]
fn test_highlight_kinds_to_lsp() {
    assert_eq!(HighlightKind::Text.to_lsp(), 1);
    assert_eq!(HighlightKind::Read.to_lsp(), 2);
    assert_eq!(HighlightKind::Write.to_lsp(), 3);
}
