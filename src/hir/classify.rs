//! Identifier classification: declaration or reference.
//!
//! Classification is purely structural: an identifier declares something when
//! it sits in the name slot of a named construct, and refers to something
//! otherwise.

use crate::parser::{AstNode, Name, SyntaxKind, SyntaxNode};

use super::symbols::{SymbolKind, declared_name};

/// What an identifier occurrence does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdentifierRole {
    /// Introduces a name of the given kind
    Declaration(SymbolKind),
    /// Names a type, e.g. inside a field's type expression
    TypeReference,
    /// Any other use of a name (extends targets, constant values)
    Reference,
}

impl IdentifierRole {
    pub fn is_declaration(&self) -> bool {
        matches!(self, Self::Declaration(_))
    }

    /// Kind label for display: the declared kind, `type` or `reference`
    pub fn semantic_kind(&self) -> &'static str {
        match self {
            Self::Declaration(kind) => kind.display(),
            Self::TypeReference => "type",
            Self::Reference => "reference",
        }
    }
}

/// Classify an identifier occurrence by its position in the tree.
pub fn classify(name: &Name) -> IdentifierRole {
    let Some(parent) = name.syntax().parent() else {
        return IdentifierRole::Reference;
    };

    if parent.kind() == SyntaxKind::FIELD_TYPE {
        return IdentifierRole::TypeReference;
    }

    let Some(kind) = declaration_kind(parent.kind(), &parent) else {
        return IdentifierRole::Reference;
    };

    match declared_name(&parent) {
        Some(slot) if slot == *name => IdentifierRole::Declaration(kind),
        _ => IdentifierRole::Reference,
    }
}

/// The kind declared by a named construct, if `kind` is one
fn declaration_kind(kind: SyntaxKind, node: &SyntaxNode) -> Option<SymbolKind> {
    if let Some(kind) = SymbolKind::from_definition(kind) {
        return Some(kind);
    }
    match kind {
        SyntaxKind::FUNCTION_DEF => Some(SymbolKind::Method),
        SyntaxKind::ENUM_VALUE => Some(SymbolKind::EnumValue),
        SyntaxKind::OPERATION => Some(SymbolKind::Operation),
        SyntaxKind::FIELD => {
            // FIELD → FIELD_LIST → FUNCTION_DEF for parameters and throws
            let in_function = node
                .parent()
                .and_then(|list| list.parent())
                .is_some_and(|owner| owner.kind() == SyntaxKind::FUNCTION_DEF);
            Some(if in_function {
                SymbolKind::Parameter
            } else {
                SymbolKind::Field
            })
        }
        _ => None,
    }
}
