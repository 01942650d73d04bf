//! Name resolution: which identifier is under the cursor, and where else
//! the same name occurs.
//!
//! "The same symbol" means an identifier with exactly the same text. There
//! is no lexical scope tree: two structs that each declare a field `name`
//! share every occurrence of `name`.

use smol_str::SmolStr;

use crate::base::{Position, Range, TextRange, TextSize};
use crate::parser::{AstNode, Name, SyntaxKind, SyntaxNode, SyntaxToken};
use crate::syntax::Document;

use super::classify::{IdentifierRole, classify};

/// How far above the token under the cursor to look for a NAME node
const MAX_UPWARD_STEPS: usize = 3;

/// The identifier found at a cursor position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedName {
    pub name: SmolStr,
    pub range: Range,
    pub role: IdentifierRole,
}

/// One occurrence of a name in a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occurrence {
    pub node: Name,
    pub range: Range,
    pub role: IdentifierRole,
}

impl Occurrence {
    /// Whether the occurrence sits inside an error-recovery node
    pub fn in_error(&self) -> bool {
        self.node
            .syntax()
            .ancestors()
            .any(|n| n.kind() == SyntaxKind::ERROR)
    }
}

/// Find the identifier at a byte offset.
///
/// At a boundary between two tokens the identifier on either side wins.
pub fn name_at_offset(root: &SyntaxNode, offset: TextSize) -> Option<Name> {
    if offset > root.text_range().end() {
        return None;
    }
    root.token_at_offset(offset).find_map(|token| enclosing_name(&token))
}

fn enclosing_name(token: &SyntaxToken) -> Option<Name> {
    token
        .parent_ancestors()
        .take(MAX_UPWARD_STEPS)
        .find_map(Name::cast)
}

/// Find the identifier at an editor position.
///
/// Returns `None` for positions outside the document or not touching an
/// identifier, and for documents without a tree.
pub fn symbol_at(document: &Document, position: Position) -> Option<ResolvedName> {
    let offset = document.offset(position)?;
    let root = document.tree()?;
    let name = name_at_offset(&root, offset)?;
    Some(ResolvedName {
        name: SmolStr::new(name.syntax().text().to_string()),
        range: document.node_range(name.syntax()),
        role: classify(&name),
    })
}

/// Every identifier in `document` whose text is exactly `name`, in tree
/// pre-order. Empty for documents without a tree.
///
/// A plain name also matches the segments of qualified names, so `Role`
/// occurs once in `Role.ADMIN` with the range of that segment.
pub fn find_occurrences(document: &Document, name: &str) -> Vec<Occurrence> {
    let Some(root) = document.tree() else {
        tracing::trace!(uri = document.uri(), "skipping document without a tree");
        return Vec::new();
    };
    let mut occurrences = Vec::new();
    for node in root.descendants().filter_map(Name::cast) {
        let ranges = matching_ranges(&node, name);
        if ranges.is_empty() {
            continue;
        }
        let role = classify(&node);
        occurrences.extend(ranges.into_iter().map(|range| Occurrence {
            node: node.clone(),
            range: document.range(range),
            role,
        }));
    }
    occurrences
}

/// Ranges within `node` that spell `name`: the whole node, or for a plain
/// name each matching segment of a qualified one.
fn matching_ranges(node: &Name, name: &str) -> Vec<TextRange> {
    let syntax = node.syntax();
    if syntax.text() == name {
        return vec![syntax.text_range()];
    }
    if name.contains('.') {
        return Vec::new();
    }
    syntax
        .children_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| token.kind() == SyntaxKind::IDENT && token.text() == name)
        .map(|token| token.text_range())
        .collect()
}
