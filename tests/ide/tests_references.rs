//! Find references tests for the IDE layer.

use idlsense::ide::{Analysis, Location, find_references};
use idlsense::{DocumentSet, Range};

use crate::helpers::document_helpers::{document_set, position_of, thrift};
use crate::helpers::source_fixtures::*;

// =============================================================================
// FIND REFERENCES - BASIC
// =============================================================================

#[test]
fn test_find_references_from_declaration() {
    let document = thrift(USER_SERVICE);
    let position = position_of(USER_SERVICE, "User {", 0);
    let refs = find_references(&document, position, true, &DocumentSet::new());
    // declaration, map value type, getUser return type
    assert_eq!(refs.len(), 3);
    assert!(refs.iter().all(|l| l.uri == "test.thrift"));
}

#[test]
fn test_find_references_from_usage() {
    let document = thrift(USER_SERVICE);
    let from_declaration = find_references(
        &document,
        position_of(USER_SERVICE, "UserId", 0),
        true,
        &DocumentSet::new(),
    );
    let from_usage = find_references(
        &document,
        position_of(USER_SERVICE, "UserId", 2),
        true,
        &DocumentSet::new(),
    );
    assert_eq!(from_declaration, from_usage);
    assert_eq!(from_usage.len(), 4);
}

#[test]
fn test_include_declaration_difference_is_one() {
    let document = thrift(USER_SERVICE);
    for nth in 0..2 {
        let position = position_of(USER_SERVICE, "NotFound", nth);
        let with = find_references(&document, position, true, &DocumentSet::new());
        let without = find_references(&document, position, false, &DocumentSet::new());
        assert_eq!(with.len(), without.len() + 1, "from occurrence {}", nth);
    }
}

#[test]
fn test_include_declaration_with_repeated_declarations() {
    let document = thrift(USER_SERVICE);
    // `id` is a field of User and a parameter of both methods
    let field = position_of(USER_SERVICE, "id\n", 0);
    let with = find_references(&document, field, true, &DocumentSet::new());
    let without = find_references(&document, field, false, &DocumentSet::new());
    assert_eq!(with.len(), 3);
    assert_eq!(without.len(), 2);
    assert_eq!(without, with[1..].to_vec());
}

#[test]
fn test_references_are_in_tree_order() {
    let document = thrift(USER_SERVICE);
    let refs = find_references(
        &document,
        position_of(USER_SERVICE, "UserId", 0),
        true,
        &DocumentSet::new(),
    );
    let mut sorted = refs.clone();
    sorted.sort();
    assert_eq!(refs, sorted);
}

// =============================================================================
// FIND REFERENCES - ACROSS DOCUMENTS
// =============================================================================

#[test]
fn test_references_across_documents() {
    let shared = "struct User {\n  1: i64 id\n}";
    let team = "struct Team {\n  1: User lead\n  2: list<User> members\n}";
    let documents = document_set(&[("shared.thrift", shared), ("team.thrift", team)]);
    let origin = documents.get("team.thrift").unwrap();

    let refs = find_references(origin, position_of(team, "User", 0), true, &documents);
    assert_eq!(
        refs,
        vec![
            Location::new("team.thrift", Range::from_coords(1, 5, 1, 9)),
            Location::new("team.thrift", Range::from_coords(2, 10, 2, 14)),
            Location::new("shared.thrift", Range::from_coords(0, 7, 0, 11)),
        ]
    );
}

#[test]
fn test_references_include_qualified_segments() {
    let shared = "struct User {\n  1: i64 id\n}";
    let team = "include \"shared.thrift\"\n\nstruct Team {\n  1: shared.User lead\n}";
    let documents = document_set(&[("shared.thrift", shared), ("team.thrift", team)]);
    let origin = documents.get("shared.thrift").unwrap();

    let refs = find_references(origin, position_of(shared, "User", 0), true, &documents);
    assert_eq!(
        refs,
        vec![
            Location::new("shared.thrift", Range::from_coords(0, 7, 0, 11)),
            Location::new("team.thrift", Range::from_coords(3, 12, 3, 16)),
        ]
    );
}

#[test]
fn test_documents_without_tree_are_skipped() {
    let mut documents = DocumentSet::new();
    documents.set_file_content("a.thrift", "struct User {}");
    documents.set_file_content("notes.md", "User User User");
    let analysis = Analysis::new(&documents);
    let refs = analysis.find_references("a.thrift", idlsense::Position::new(0, 7), true);
    assert_eq!(refs.len(), 1);
}

#[test]
fn test_no_symbol_gives_empty_list() {
    let document = thrift(USER_SERVICE);
    let refs = find_references(
        &document,
        idlsense::Position::new(1000, 0),
        true,
        &DocumentSet::new(),
    );
    assert!(refs.is_empty());
}
