//! Document outline.

use smol_str::SmolStr;

use crate::base::Range;
use crate::hir::{SymbolKind, declared_name};
use crate::parser::{AstNode, Definition, FieldList, SyntaxNode};
use crate::syntax::Document;

/// A symbol in the document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolInfo {
    pub name: SmolStr,
    pub kind: SymbolKind,
    /// Range of the whole construct.
    pub range: Range,
    /// Range of the name.
    pub selection_range: Range,
    /// Fields, parameters, enum values, methods or operations.
    pub children: Vec<SymbolInfo>,
}

/// The outline of a document: its top-level definitions in source order,
/// each with its members as children.
pub fn document_symbols(document: &Document) -> Vec<SymbolInfo> {
    let Some(root) = document.tree() else {
        return Vec::new();
    };
    document
        .symbols()
        .into_iter()
        .map(|symbol| {
            let node = symbol.to_node(&root);
            SymbolInfo {
                children: members(document, &node),
                name: symbol.name,
                kind: symbol.kind,
                range: symbol.full_range,
                selection_range: symbol.declaration_range,
            }
        })
        .collect()
}

fn members(document: &Document, node: &SyntaxNode) -> Vec<SymbolInfo> {
    let Some(definition) = Definition::cast(node.clone()) else {
        return Vec::new();
    };
    match definition {
        Definition::Struct(_) | Definition::Union(_) | Definition::Exception(_) => definition
            .field_list()
            .map(|list| fields(document, &list, SymbolKind::Field))
            .unwrap_or_default(),
        Definition::Enum(def) => def
            .values()
            .filter_map(|value| leaf(document, value.syntax(), SymbolKind::EnumValue))
            .collect(),
        Definition::Service(def) => def
            .functions()
            .filter_map(|function| {
                let mut info = leaf(document, function.syntax(), SymbolKind::Method)?;
                info.children = function
                    .field_lists()
                    .flat_map(|(_, list)| fields(document, &list, SymbolKind::Parameter))
                    .collect();
                Some(info)
            })
            .collect(),
        Definition::Scope(def) => def
            .operations()
            .filter_map(|operation| leaf(document, operation.syntax(), SymbolKind::Operation))
            .collect(),
        Definition::Const(_) | Definition::Typedef(_) => Vec::new(),
    }
}

fn fields(document: &Document, list: &FieldList, kind: SymbolKind) -> Vec<SymbolInfo> {
    list.fields()
        .filter_map(|field| leaf(document, field.syntax(), kind))
        .collect()
}

/// A childless entry for a named member, `None` if it has no name
fn leaf(document: &Document, node: &SyntaxNode, kind: SymbolKind) -> Option<SymbolInfo> {
    let name = declared_name(node)?;
    Some(SymbolInfo {
        name: SmolStr::new(name.text()),
        kind,
        range: document.node_range(node),
        selection_range: document.node_range(name.syntax()),
        children: Vec::new(),
    })
}
