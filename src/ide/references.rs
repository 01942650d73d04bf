//! Find references implementation.

use indexmap::IndexSet;

use crate::base::{Position, Range};
use crate::hir::{find_occurrences, symbol_at};
use crate::syntax::{Document, DocumentSet};

/// A range in a named document.
///
/// Two locations are equal exactly when their URIs and ranges are.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub uri: String,
    pub range: Range,
}

impl Location {
    pub fn new(uri: impl Into<String>, range: Range) -> Self {
        Self {
            uri: uri.into(),
            range,
        }
    }
}

/// Find every occurrence of the identifier at `position`.
///
/// The origin document is searched first, then each document of
/// `documents` in insertion order; within a document occurrences are in
/// tree order. An entry of `documents` with the origin's URI is skipped in
/// favour of `document` itself. Documents without a tree are skipped.
///
/// With `include_declaration` false, the declaration of the name is left
/// out: the occurrence under the cursor when it declares the name, otherwise
/// the first declaration in search order. Other declarations of the same
/// text stay in the result.
///
/// # Returns
/// The locations, or empty if the position touches no identifier.
pub fn find_references(
    document: &Document,
    position: Position,
    include_declaration: bool,
    documents: &DocumentSet,
) -> Vec<Location> {
    let Some(resolved) = symbol_at(document, position) else {
        tracing::debug!(uri = document.uri(), ?position, "no symbol at position");
        return Vec::new();
    };

    let others = documents.iter().filter(|other| other.uri() != document.uri());
    let mut locations = IndexSet::new();
    let mut first_declaration = None;

    for doc in std::iter::once(document).chain(others) {
        tracing::trace!(uri = doc.uri(), name = %resolved.name, "scanning document");
        for occurrence in find_occurrences(doc, &resolved.name) {
            let location = Location::new(doc.uri(), occurrence.range);
            if first_declaration.is_none() && occurrence.role.is_declaration() {
                first_declaration = Some(location.clone());
            }
            locations.insert(location);
        }
    }

    if !include_declaration {
        let declaration = if resolved.role.is_declaration() {
            Some(Location::new(document.uri(), resolved.range))
        } else {
            first_declaration
        };
        if let Some(declaration) = declaration {
            locations.shift_remove(&declaration);
        }
    }

    tracing::debug!(
        name = %resolved.name,
        count = locations.len(),
        include_declaration,
        "found references"
    );
    locations.into_iter().collect()
}
