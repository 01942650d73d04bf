//! Parser tests over realistic IDL sources.

use rstest::rstest;

use idlsense::parser::{AstNode, Definition, SourceFile, SyntaxKind, parse};

use crate::helpers::source_fixtures::*;

fn source_file(source: &str) -> SourceFile {
    let parse = parse(source);
    assert!(parse.ok(), "Parse errors: {:?}", parse.errors);
    SourceFile::cast(parse.syntax()).unwrap()
}

#[rstest]
#[case(SIMPLE_STRUCT, "simple struct")]
#[case(USER_SERVICE, "service with includes and containers")]
#[case(EVENTS_SCOPE, "frugal scope")]
#[case(SERVICE_WITH_THROWS, "function with throws")]
#[case("union Value { 1: string s; 2: i64 n; }", "union with semicolons")]
#[case("const map<string, i32> LIMITS = {\"a\": 1, \"b\": 2}", "const map")]
#[case("const list<string> NAMES = [\"a\", \"b\"]", "const list")]
#[case("struct A { 1: string s (go.tag = \"json\") } (final = \"true\")", "annotations")]
#[case("cpp_include \"<vector>\"\nnamespace * demo.api", "headers")]
fn test_parses_without_errors(#[case] source: &str, #[case] desc: &str) {
    let parse = parse(source);
    assert!(parse.ok(), "Failed to parse {}: {:?}", desc, parse.errors);
    assert_eq!(parse.syntax().text().to_string(), source, "{} is not lossless", desc);
}

#[test]
fn test_definitions_in_order() {
    let file = source_file(USER_SERVICE);
    let names: Vec<_> = file
        .definitions()
        .filter_map(|d| d.name())
        .map(|n| n.text())
        .collect();
    assert_eq!(
        names,
        vec!["UserId", "MAX_USERS", "Role", "User", "NotFound", "UserService"]
    );
    assert_eq!(file.includes().filter_map(|i| i.path()).collect::<Vec<_>>(), vec!["shared.thrift"]);
}

#[test]
fn test_service_structure() {
    let file = source_file(USER_SERVICE);
    let Some(Definition::Service(service)) = file.definitions().last() else {
        panic!("expected a service");
    };
    assert_eq!(service.extends().map(|n| n.text()), Some("shared.BaseService".to_string()));

    let functions: Vec<_> = service.functions().collect();
    assert_eq!(functions.len(), 2);
    assert_eq!(functions[0].params().unwrap().fields().count(), 1);
    assert_eq!(functions[0].throws().unwrap().fields().count(), 1);
    assert!(functions[1].is_oneway());
    assert!(functions[1].throws().is_none());
}

#[test]
fn test_field_details() {
    let file = source_file(USER_SERVICE);
    let user = file
        .definitions()
        .find(|d| d.name().is_some_and(|n| n.text() == "User"))
        .unwrap();
    let fields: Vec<_> = user.field_list().unwrap().fields().collect();
    assert_eq!(fields.len(), 5);
    assert!(fields[0].is_required());
    assert!(fields[1].is_optional());
    assert_eq!(fields[2].field_id().and_then(|id| id.value()), Some(3));

    let friends = fields[4].field_type().unwrap();
    assert!(friends.is_container());
    let arguments: Vec<_> = friends
        .type_arguments()
        .iter()
        .filter_map(|t| t.name())
        .map(|n| n.text())
        .collect();
    assert_eq!(arguments, vec!["string", "User"]);
}

#[test]
fn test_recovery_reports_errors_and_keeps_tree() {
    let parse = parse("struct A {\n  1: i32\n}\nstruct B { 1: string name }");
    assert!(!parse.ok());
    let defs = parse
        .syntax()
        .children()
        .filter(|n| n.kind() == SyntaxKind::STRUCT_DEF)
        .count();
    assert_eq!(defs, 2);
}
