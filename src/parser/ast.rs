//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for IDL syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Adds `name()` returning the first NAME child, which is the declared name
/// for every named construct.
macro_rules! named {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                pub fn name(&self) -> Option<Name> {
                    self.0.children().find_map(Name::cast)
                }
            }
        )*
    };
}

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    pub fn definitions(&self) -> impl Iterator<Item = Definition> + '_ {
        self.0.children().filter_map(Definition::cast)
    }

    pub fn includes(&self) -> impl Iterator<Item = Include> + '_ {
        self.0.children().filter_map(Include::cast)
    }
}

// ============================================================================
// Definitions
// ============================================================================

/// Any top-level named definition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Definition {
    Const(ConstDef),
    Typedef(TypedefDef),
    Enum(EnumDef),
    Struct(StructDef),
    Union(UnionDef),
    Exception(ExceptionDef),
    Service(ServiceDef),
    Scope(ScopeDef),
}

impl AstNode for Definition {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind.is_definition()
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::CONST_DEF => Some(Self::Const(ConstDef(node))),
            SyntaxKind::TYPEDEF_DEF => Some(Self::Typedef(TypedefDef(node))),
            SyntaxKind::ENUM_DEF => Some(Self::Enum(EnumDef(node))),
            SyntaxKind::STRUCT_DEF => Some(Self::Struct(StructDef(node))),
            SyntaxKind::UNION_DEF => Some(Self::Union(UnionDef(node))),
            SyntaxKind::EXCEPTION_DEF => Some(Self::Exception(ExceptionDef(node))),
            SyntaxKind::SERVICE_DEF => Some(Self::Service(ServiceDef(node))),
            SyntaxKind::SCOPE_DEF => Some(Self::Scope(ScopeDef(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Const(n) => n.syntax(),
            Self::Typedef(n) => n.syntax(),
            Self::Enum(n) => n.syntax(),
            Self::Struct(n) => n.syntax(),
            Self::Union(n) => n.syntax(),
            Self::Exception(n) => n.syntax(),
            Self::Service(n) => n.syntax(),
            Self::Scope(n) => n.syntax(),
        }
    }
}

impl Definition {
    pub fn name(&self) -> Option<Name> {
        self.syntax().children().find_map(Name::cast)
    }

    /// The field list of a struct, union or exception
    pub fn field_list(&self) -> Option<FieldList> {
        match self {
            Self::Struct(_) | Self::Union(_) | Self::Exception(_) => {
                self.syntax().children().find_map(FieldList::cast)
            }
            _ => None,
        }
    }
}

ast_node!(Include, INCLUDE);

impl Include {
    /// The included path without quotes
    pub fn path(&self) -> Option<String> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::STRING)
            .map(|t| t.text()[1..t.text().len() - 1].to_string())
    }
}

ast_node!(ConstDef, CONST_DEF);
ast_node!(TypedefDef, TYPEDEF_DEF);
ast_node!(EnumDef, ENUM_DEF);
ast_node!(StructDef, STRUCT_DEF);
ast_node!(UnionDef, UNION_DEF);
ast_node!(ExceptionDef, EXCEPTION_DEF);
ast_node!(ServiceDef, SERVICE_DEF);
ast_node!(ScopeDef, SCOPE_DEF);

named!(
    ConstDef,
    TypedefDef,
    EnumDef,
    StructDef,
    UnionDef,
    ExceptionDef,
    ServiceDef,
    ScopeDef,
    EnumValue,
    Field,
    FunctionDef,
    Operation,
);

impl ConstDef {
    pub fn field_type(&self) -> Option<FieldType> {
        self.0.children().find_map(FieldType::cast)
    }
}

impl TypedefDef {
    pub fn field_type(&self) -> Option<FieldType> {
        self.0.children().find_map(FieldType::cast)
    }
}

impl EnumDef {
    pub fn values(&self) -> impl Iterator<Item = EnumValue> + '_ {
        self.0.children().filter_map(EnumValue::cast)
    }
}

ast_node!(EnumValue, ENUM_VALUE);

impl ServiceDef {
    /// The `extends` target, if any
    pub fn extends(&self) -> Option<Name> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::EXTENDS_CLAUSE)
            .and_then(|clause| clause.children().find_map(Name::cast))
    }

    pub fn functions(&self) -> impl Iterator<Item = FunctionDef> + '_ {
        self.0.children().filter_map(FunctionDef::cast)
    }
}

impl ScopeDef {
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        self.0.children().filter_map(Operation::cast)
    }
}

ast_node!(Operation, OPERATION);

impl Operation {
    pub fn field_type(&self) -> Option<FieldType> {
        self.0.children().find_map(FieldType::cast)
    }
}

// ============================================================================
// Functions and fields
// ============================================================================

ast_node!(FunctionDef, FUNCTION_DEF);

impl FunctionDef {
    pub fn return_type(&self) -> Option<FieldType> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::FUNCTION_TYPE)
            .and_then(|n| n.children().find_map(FieldType::cast))
    }

    pub fn is_oneway(&self) -> bool {
        self.0
            .children_with_tokens()
            .any(|e| e.kind() == SyntaxKind::ONEWAY_KW)
    }

    /// The parameter list: the field list before the `throws` keyword
    pub fn params(&self) -> Option<FieldList> {
        self.field_lists().find(|(after_throws, _)| !after_throws).map(|(_, list)| list)
    }

    /// The throws list: the field list after the `throws` keyword
    pub fn throws(&self) -> Option<FieldList> {
        self.field_lists().find(|(after_throws, _)| *after_throws).map(|(_, list)| list)
    }

    /// Field lists paired with whether a `throws` token precedes them
    pub fn field_lists(&self) -> impl Iterator<Item = (bool, FieldList)> + '_ {
        let mut after_throws = false;
        self.0.children_with_tokens().filter_map(move |element| {
            if element.kind() == SyntaxKind::THROWS_KW {
                after_throws = true;
                return None;
            }
            element
                .into_node()
                .and_then(FieldList::cast)
                .map(|list| (after_throws, list))
        })
    }
}

ast_node!(FieldList, FIELD_LIST);

impl FieldList {
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.children().filter_map(Field::cast)
    }
}

ast_node!(Field, FIELD);

impl Field {
    pub fn field_id(&self) -> Option<FieldId> {
        self.0.children().find_map(FieldId::cast)
    }

    pub fn field_type(&self) -> Option<FieldType> {
        self.0.children().find_map(FieldType::cast)
    }

    pub fn is_optional(&self) -> bool {
        self.requiredness() == Some(SyntaxKind::OPTIONAL_KW)
    }

    pub fn is_required(&self) -> bool {
        self.requiredness() == Some(SyntaxKind::REQUIRED_KW)
    }

    fn requiredness(&self) -> Option<SyntaxKind> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::FIELD_REQ)
            .and_then(|n| n.first_token())
            .map(|t| t.kind())
    }
}

ast_node!(FieldId, FIELD_ID);

impl FieldId {
    /// The integer token as written, e.g. `-1`
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::INTEGER)
    }

    /// The parsed id, `None` if it is not a decimal integer that fits in i64
    pub fn value(&self) -> Option<i64> {
        self.token().and_then(|t| t.text().parse().ok())
    }
}

// ============================================================================
// Types
// ============================================================================

ast_node!(FieldType, FIELD_TYPE);

impl FieldType {
    /// The referenced type name, `None` for container types
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    /// The `map`/`set`/`list` node, if this is a container type
    pub fn container(&self) -> Option<SyntaxNode> {
        self.0.children().find(|n| n.kind().is_container_type())
    }

    pub fn is_container(&self) -> bool {
        self.container().is_some()
    }

    /// Element/key/value types of a container type
    pub fn type_arguments(&self) -> Vec<FieldType> {
        self.container()
            .map(|c| c.children().filter_map(FieldType::cast).collect())
            .unwrap_or_default()
    }
}

// ============================================================================
// Names
// ============================================================================

ast_node!(Name, NAME);

impl Name {
    /// The full identifier text, including any `.` qualification
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }

    /// The include prefix of a qualified name (`shared` in `shared.User`)
    pub fn qualifier(&self) -> Option<String> {
        let text = self.text();
        text.rsplit_once('.').map(|(prefix, _)| prefix.to_string())
    }

    pub fn is_qualified(&self) -> bool {
        self.0
            .children_with_tokens()
            .any(|e| e.kind() == SyntaxKind::DOT)
    }
}
