//! Reserved words and builtin type names.

/// Keywords recognised by the lexer
pub const KEYWORDS: &[&str] = &[
    "include",
    "cpp_include",
    "namespace",
    "const",
    "typedef",
    "enum",
    "struct",
    "union",
    "exception",
    "service",
    "scope",
    "extends",
    "throws",
    "oneway",
    "required",
    "optional",
    "prefix",
    "map",
    "set",
    "list",
    "true",
    "false",
];

/// Primitive types and the `void` return type. These lex as identifiers.
pub const BUILTIN_TYPES: &[&str] = &[
    "bool", "byte", "i8", "i16", "i32", "i64", "double", "string", "binary", "uuid", "void",
];

/// Container type constructors. These are keywords, listed here so name
/// checks can treat them like the primitives.
pub const CONTAINER_TYPES: &[&str] = &["map", "set", "list"];

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Check if a name is a primitive or container type name
pub fn is_builtin_type(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name) || CONTAINER_TYPES.contains(&name)
}

/// Check if a name can never be used for a user-defined symbol
pub fn is_reserved(name: &str) -> bool {
    is_keyword(name) || is_builtin_type(name)
}
