//! Rename tests for the IDE layer.

use rstest::rstest;

use idlsense::Range;
use idlsense::ide::{Analysis, RenameError, rename, validate_new_name};

use crate::helpers::document_helpers::{document_set, position_of};

const SHARED: &str = "struct User {\n  1: i64 id\n}\n\nstruct Owner {\n  1: User user\n}";
const TEAM: &str = "struct Team {\n  1: User lead\n}";

#[test]
fn test_rename_across_two_documents() {
    let documents = document_set(&[
        ("file:///shared.thrift", SHARED),
        ("file:///team.thrift", TEAM),
    ]);
    let analysis = Analysis::new(&documents);

    let edit = analysis
        .rename("file:///shared.thrift", position_of(SHARED, "User", 0), "Person")
        .unwrap();

    assert_eq!(edit.changes.len(), 2);
    assert_eq!(edit.edits("file:///shared.thrift").len(), 2);
    assert_eq!(edit.edits("file:///team.thrift").len(), 1);
    assert_eq!(edit.edit_count(), 3);
    assert!(
        edit.changes
            .values()
            .flatten()
            .all(|e| e.new_text == "Person")
    );

    let mut ranges: Vec<_> = edit
        .changes
        .iter()
        .flat_map(|(uri, edits)| edits.iter().map(move |e| (uri.clone(), e.range)))
        .collect();
    let total = ranges.len();
    ranges.sort();
    ranges.dedup();
    assert_eq!(ranges.len(), total, "each range replaced exactly once");
}

#[test]
fn test_rename_from_other_document() {
    let documents = document_set(&[("shared.thrift", SHARED), ("team.thrift", TEAM)]);
    let team = documents.get("team.thrift").unwrap();
    let edit = rename(team, position_of(TEAM, "User", 0), "Member", &documents).unwrap();
    assert_eq!(edit.edit_count(), 3);
    // the origin document comes first
    assert_eq!(edit.changes.keys().next().map(String::as_str), Some("team.thrift"));
}

#[test]
fn test_rename_updates_qualified_uses() {
    let source = "enum Role {\n  ADMIN = 1\n}\nstruct User {\n  1: Role role = Role.ADMIN\n}";
    let documents = document_set(&[("user.thrift", source)]);
    let document = documents.get("user.thrift").unwrap();

    let edit = rename(document, position_of(source, "Role", 0), "Permission", &documents).unwrap();
    let ranges: Vec<_> = edit.edits("user.thrift").iter().map(|e| e.range).collect();
    assert_eq!(
        ranges,
        vec![
            Range::from_coords(0, 5, 0, 9),
            Range::from_coords(4, 5, 4, 9),
            Range::from_coords(4, 17, 4, 21),
        ]
    );
}

#[test]
fn test_qualified_name_is_not_renameable_as_a_whole() {
    let source = "enum Role {\n  ADMIN = 1\n}\nconst Role DEFAULT = Role.ADMIN";
    let documents = document_set(&[("user.thrift", source)]);
    let document = documents.get("user.thrift").unwrap();
    let result = rename(document, position_of(source, "Role.ADMIN", 0), "Other", &documents);
    assert!(matches!(result, Err(RenameError::NotRenameable(_))));
}

#[rstest]
#[case("User", "same name")]
#[case("struct", "keyword")]
#[case("service", "keyword")]
#[case("string", "builtin type")]
#[case("i32", "builtin type")]
#[case("9Lives", "leading digit")]
#[case("New User", "embedded whitespace")]
#[case("Üser", "non-ascii")]
#[case("", "empty")]
fn test_rename_rejections(#[case] new_name: &str, #[case] desc: &str) {
    let documents = document_set(&[("shared.thrift", SHARED)]);
    let shared = documents.get("shared.thrift").unwrap();
    let result = rename(shared, position_of(SHARED, "User", 0), new_name, &documents);
    assert!(result.is_err(), "{} should be rejected", desc);
}

#[test]
fn test_rename_builtin_is_not_renameable() {
    let documents = document_set(&[("shared.thrift", SHARED)]);
    let shared = documents.get("shared.thrift").unwrap();
    let result = rename(shared, position_of(SHARED, "i64", 0), "long", &documents);
    assert!(matches!(result, Err(RenameError::NotRenameable(_))));
}

#[test]
fn test_validation_messages() {
    let error = validate_new_name("1abc").unwrap_err();
    assert_eq!(error.to_string(), "'1abc' is not a valid identifier");
}

#[test]
fn test_prepare_rename_through_analysis() {
    let documents = document_set(&[("shared.thrift", SHARED)]);
    let analysis = Analysis::new(&documents);
    let (name, _) = analysis
        .prepare_rename("shared.thrift", position_of(SHARED, "Owner", 0))
        .unwrap();
    assert_eq!(name, "Owner");
}
