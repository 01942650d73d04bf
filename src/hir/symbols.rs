//! Symbol extraction: top-level definitions of a document.
//!
//! A single pre-order pass over the tree emits one [`Symbol`] per named
//! definition. Nothing is cached: callers re-extract whenever they need the
//! symbols of the current tree.

use rowan::ast::SyntaxNodePtr;
use smol_str::SmolStr;

use crate::base::{LineIndex, Range};
use crate::parser::{AstNode, IdlLanguage, Name, SyntaxKind, SyntaxNode};
use crate::syntax::Document;

/// The kind of a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolKind {
    Service,
    Scope,
    Struct,
    Union,
    Enum,
    Const,
    Typedef,
    Exception,
    Field,
    Parameter,
    EnumValue,
    Method,
    Operation,
}

impl SymbolKind {
    /// Map a definition node kind to its symbol kind
    pub fn from_definition(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::SERVICE_DEF => Some(Self::Service),
            SyntaxKind::SCOPE_DEF => Some(Self::Scope),
            SyntaxKind::STRUCT_DEF => Some(Self::Struct),
            SyntaxKind::UNION_DEF => Some(Self::Union),
            SyntaxKind::ENUM_DEF => Some(Self::Enum),
            SyntaxKind::CONST_DEF => Some(Self::Const),
            SyntaxKind::TYPEDEF_DEF => Some(Self::Typedef),
            SyntaxKind::EXCEPTION_DEF => Some(Self::Exception),
            _ => None,
        }
    }

    /// Get a display name for this kind, as written in source.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Scope => "scope",
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::Const => "const",
            Self::Typedef => "typedef",
            Self::Exception => "exception",
            Self::Field => "field",
            Self::Parameter => "parameter",
            Self::EnumValue => "enum value",
            Self::Method => "method",
            Self::Operation => "operation",
        }
    }

    /// Kinds that can appear as a field type
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            Self::Struct | Self::Union | Self::Enum | Self::Typedef | Self::Exception
        )
    }

    /// Type-level constructs, named in PascalCase
    pub fn is_type_level(&self) -> bool {
        matches!(
            self,
            Self::Service | Self::Struct | Self::Union | Self::Enum | Self::Exception | Self::Scope
        )
    }
}

/// A named top-level definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// The declared name, never empty
    pub name: SmolStr,
    pub kind: SymbolKind,
    /// Range of the name token only
    pub declaration_range: Range,
    /// Range of the whole definition, including its body
    pub full_range: Range,
    /// Non-owning pointer back to the definition node
    pub node: SyntaxNodePtr<IdlLanguage>,
}

impl Symbol {
    /// Re-resolve the definition node against the tree it came from.
    pub fn to_node(&self, root: &SyntaxNode) -> SyntaxNode {
        self.node.to_node(root)
    }
}

/// Extract the top-level symbols of a tree, in source order.
///
/// Definitions without a name are skipped.
pub fn extract_symbols(root: &SyntaxNode, line_index: &LineIndex) -> Vec<Symbol> {
    root.descendants()
        .filter_map(|node| {
            let kind = SymbolKind::from_definition(node.kind())?;
            let name = declared_name(&node)?;
            let text = SmolStr::new(name.syntax().text().to_string());
            if text.is_empty() {
                return None;
            }
            Some(Symbol {
                name: text,
                kind,
                declaration_range: line_index.range(name.syntax().text_range()),
                full_range: line_index.range(node.text_range()),
                node: SyntaxNodePtr::new(&node),
            })
        })
        .collect()
}

/// The name slot of a named construct: its first NAME child.
pub fn declared_name(node: &SyntaxNode) -> Option<Name> {
    node.children().find_map(Name::cast)
}

impl Document {
    /// Extract the symbols of this document's current tree.
    pub fn symbols(&self) -> Vec<Symbol> {
        match self.tree() {
            Some(root) => extract_symbols(&root, self.line_index()),
            None => Vec::new(),
        }
    }
}
