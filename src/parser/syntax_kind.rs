//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! It follows the Thrift IDL grammar, extended with Frugal scopes.

/// All syntax kinds (tokens and nodes) in a Thrift/Frugal document
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (definitions, fields, types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // identifier
    INTEGER, // 42, -1, 0x1F
    DOUBLE,  // 3.14
    STRING,  // "hello" or 'hello'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,   // {
    R_BRACE,   // }
    L_BRACKET, // [
    R_BRACKET, // ]
    L_PAREN,   // (
    R_PAREN,   // )
    LT,        // <
    GT,        // >
    COMMA,     // ,
    SEMICOLON, // ;
    COLON,     // :
    EQ,        // =
    DOT,       // .
    STAR,      // *

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    // Headers
    INCLUDE_KW,
    CPP_INCLUDE_KW,
    NAMESPACE_KW,

    // Definitions
    CONST_KW,
    TYPEDEF_KW,
    ENUM_KW,
    STRUCT_KW,
    UNION_KW,
    EXCEPTION_KW,
    SERVICE_KW,
    SCOPE_KW,

    // Service members
    EXTENDS_KW,
    THROWS_KW,
    ONEWAY_KW,

    // Field requiredness
    REQUIRED_KW,
    OPTIONAL_KW,

    // Frugal scopes
    PREFIX_KW,

    // Containers
    MAP_KW,
    SET_KW,
    LIST_KW,

    // Boolean literals
    TRUE_KW,
    FALSE_KW,

    // =========================================================================
    // COMPOSITE NODES (non-terminals in the grammar)
    // =========================================================================
    // Root
    SOURCE_FILE,

    // Headers
    INCLUDE,
    CPP_INCLUDE,
    NAMESPACE,

    // Definitions
    CONST_DEF,
    TYPEDEF_DEF,
    ENUM_DEF,
    STRUCT_DEF,
    UNION_DEF,
    EXCEPTION_DEF,
    SERVICE_DEF,
    SCOPE_DEF,

    // Definition members
    ENUM_VALUE,
    FIELD_LIST,
    FIELD,
    FIELD_ID,
    FIELD_REQ,
    FUNCTION_DEF,
    FUNCTION_TYPE,
    EXTENDS_CLAUSE,
    SCOPE_PREFIX,
    OPERATION,

    // Types
    FIELD_TYPE,
    MAP_TYPE,
    SET_TYPE,
    LIST_TYPE,

    // Values
    CONST_VALUE,
    CONST_LIST,
    CONST_MAP,
    CONST_MAP_ENTRY,

    // Annotations `(key = "value", ...)`
    ANNOTATIONS,
    ANNOTATION,

    // Names
    NAME,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::INCLUDE_KW as u16) && (self as u16) <= (Self::FALSE_KW as u16)
    }

    /// Check if this node kind is a top-level definition
    pub fn is_definition(self) -> bool {
        matches!(
            self,
            Self::CONST_DEF
                | Self::TYPEDEF_DEF
                | Self::ENUM_DEF
                | Self::STRUCT_DEF
                | Self::UNION_DEF
                | Self::EXCEPTION_DEF
                | Self::SERVICE_DEF
                | Self::SCOPE_DEF
        )
    }

    /// Check if this node kind is a container type (`map`, `set`, `list`)
    pub fn is_container_type(self) -> bool {
        matches!(self, Self::MAP_TYPE | Self::SET_TYPE | Self::LIST_TYPE)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IdlLanguage {}

impl rowan::Language for IdlLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<IdlLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<IdlLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<IdlLanguage>;
