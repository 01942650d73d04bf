//! Diagnostics tests, end to end through the engine.

use rstest::rstest;

use idlsense::hir::{DiagnosticsConfig, DiagnosticsEngine, Severity, codes};
use idlsense::{Position, Range};

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::document_helpers::thrift;
use crate::helpers::source_fixtures::*;

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_duplicate_struct_definition() {
    let diagnostics = diagnostics_for(DUPLICATE_STRUCTS);
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Error);
    assert!(diagnostic.message.contains("Duplicate struct definition 'User'"));
    assert_eq!(diagnostic.related.len(), 1);
    assert_eq!(diagnostic.related[0].range, Range::from_coords(0, 7, 0, 11));
}

#[test]
fn test_duplicate_field_id() {
    let diagnostics = diagnostics_for(DUPLICATE_FIELD_ID);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("Duplicate field ID 1"));
}

#[test]
fn test_negative_field_id() {
    let diagnostics = diagnostics_for(NEGATIVE_FIELD_ID);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("Field ID must be positive, got -1"));
}

#[test]
fn test_params_and_throws_share_ids() {
    let diagnostics = diagnostics_for(SERVICE_WITH_THROWS);
    assert!(with_code(&diagnostics, codes::DUPLICATE_FIELD_ID).is_empty());
}

#[test]
fn test_unknown_type() {
    let diagnostics = diagnostics_for(UNKNOWN_TYPE);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("Unknown type 'UnknownType'"));
}

#[test]
fn test_realistic_sources_are_clean() {
    assert_clean(SIMPLE_STRUCT);
    assert_clean(USER_SERVICE);
    assert_clean(EVENTS_SCOPE);
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[rstest]
#[case(2)]
#[case(3)]
#[case(5)]
fn test_n_duplicates_produce_n_minus_one(#[case] n: usize) {
    let source = vec!["exception Failure {}"; n].join("\n");
    let diagnostics = errors_for(&source);
    assert_eq!(diagnostics.len(), n - 1);
    assert!(
        diagnostics
            .iter()
            .all(|d| d.related[0].range.start == Position::new(0, 10))
    );
}

#[rstest]
#[case("-5", true)]
#[case("0", true)]
#[case("1", false)]
#[case("32767", false)]
fn test_positivity(#[case] id: &str, #[case] flagged: bool) {
    let source = format!("struct User {{ {id}: string name }}");
    let diagnostics = diagnostics_for(&source);
    assert_eq!(
        !with_code(&diagnostics, codes::NON_POSITIVE_FIELD_ID).is_empty(),
        flagged
    );
}

#[test]
fn test_twice_within_one_list_is_one_diagnostic() {
    let source = "exception E {}\nservice Api {\n  void f(1: i32 a, 1: i32 b) throws (1: E x, 2: E y)\n}";
    let diagnostics = with_code(&diagnostics_for(source), codes::DUPLICATE_FIELD_ID);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("parameters of 'f'"));
}

// =============================================================================
// OTHER PASSES
// =============================================================================

#[test]
fn test_parse_errors_are_forwarded() {
    let diagnostics = diagnostics_for("struct User {\n  1: i64 id\n");
    let parse_errors = with_code(&diagnostics, codes::PARSE_ERROR);
    assert_eq!(parse_errors.len(), 1);
    assert_eq!(parse_errors[0].range, Range::from_coords(2, 0, 2, 1));
}

#[test]
fn test_naming_warnings() {
    let diagnostics = diagnostics_for("struct user_account {}\nconst i32 maxUsers = 1");
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|d| d.severity == Severity::Warning));
    assert_eq!(diagnostics[0].message, "Struct name 'user_account' should be PascalCase");
    assert_eq!(
        diagnostics[1].message,
        "Constant name 'maxUsers' should be UPPER_SNAKE_CASE"
    );
}

#[test]
fn test_duplicate_members() {
    let source = "enum Color {\n  RED,\n  RED\n}\nservice Api {\n  void ping()\n  void ping()\n}";
    let diagnostics = with_code(&diagnostics_for(source), codes::DUPLICATE_MEMBER);
    assert_eq!(diagnostics.len(), 2);
}

#[test]
fn test_engine_config() {
    let engine = DiagnosticsEngine::with_config(
        DiagnosticsConfig::default().with_builtin_type("decimal"),
    );
    let document = thrift("struct Price { 1: decimal amount }");
    assert!(engine.check(&document).is_empty());
    assert_eq!(diagnostics_for("struct Price { 1: decimal amount }").len(), 1);
}

#[test]
fn test_codes_are_stable() {
    let diagnostics = diagnostics_for(DUPLICATE_STRUCTS);
    assert_eq!(diagnostics[0].code.as_deref(), Some(codes::DUPLICATE_DEFINITION));
    assert_eq!(codes::DUPLICATE_DEFINITION, "E0002");
}
