//! Document snapshot tests.

use rstest::rstest;

use idlsense::syntax::is_idl_file;
use idlsense::{Document, DocumentSet, Position};

#[rstest]
#[case("file:///work/user.thrift", true)]
#[case("events.frugal", true)]
#[case("UPPER.THRIFT", true)]
#[case("file:///a.thrift?version=2", true)]
#[case("notes.txt", false)]
#[case("thrift", false)]
#[case("file:///a.thrift.bak", false)]
fn test_is_idl_file(#[case] uri: &str, #[case] expected: bool) {
    assert_eq!(is_idl_file(uri), expected);
}

#[test]
fn test_non_idl_documents_have_no_tree() {
    let document = Document::new("readme.md", "struct User {}");
    assert!(!document.has_tree());
    assert!(document.symbols().is_empty());
}

#[test]
fn test_offsets_round_trip_through_positions() {
    let document = Document::new("a.thrift", "struct A {}\n// é\nstruct B {}");
    let position = Position::new(2, 7);
    let offset = document.offset(position).unwrap();
    assert_eq!(document.line_index().position(offset), position);
    assert!(document.offset(Position::new(7, 0)).is_none());
}

#[test]
fn test_document_set_keeps_insertion_order() {
    let mut documents = DocumentSet::new();
    documents.set_file_content("b.thrift", "struct B {}");
    documents.set_file_content("a.thrift", "struct A {}");
    documents.set_file_content("b.thrift", "struct B2 {}");

    let uris: Vec<_> = documents.iter().map(|d| d.uri()).collect();
    assert_eq!(uris, vec!["b.thrift", "a.thrift"]);
    assert_eq!(documents.get("b.thrift").unwrap().source(), "struct B2 {}");

    documents.remove("b.thrift");
    assert_eq!(documents.len(), 1);
}

#[test]
fn test_set_file_content_returns_parse_errors() {
    let mut documents = DocumentSet::new();
    assert_eq!(documents.set_file_content("a.thrift", "struct A {").len(), 1);
    assert!(documents.contains("a.thrift"));
}
