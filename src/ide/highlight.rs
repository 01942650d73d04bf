//! Document highlights: every occurrence of the identifier under the cursor
//! within the current document.

use crate::base::{Position, Range};
use crate::hir::{Occurrence, find_occurrences, symbol_at};
use crate::syntax::Document;

/// How an occurrence uses the highlighted name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighlightKind {
    /// Inside source the parser could not make sense of
    Text,
    Read,
    /// A declaration
    Write,
}

impl HighlightKind {
    /// Convert to LSP highlight kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            HighlightKind::Text => 1,
            HighlightKind::Read => 2,
            HighlightKind::Write => 3,
        }
    }

    fn of(occurrence: &Occurrence) -> Self {
        if occurrence.in_error() {
            Self::Text
        } else if occurrence.role.is_declaration() {
            Self::Write
        } else {
            Self::Read
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentHighlight {
    pub range: Range,
    pub kind: HighlightKind,
}

/// Highlight the identifier at `position` wherever it occurs in `document`.
pub fn document_highlights(document: &Document, position: Position) -> Vec<DocumentHighlight> {
    let Some(resolved) = symbol_at(document, position) else {
        return Vec::new();
    };
    find_occurrences(document, &resolved.name)
        .iter()
        .map(|occurrence| DocumentHighlight {
            range: occurrence.range,
            kind: HighlightKind::of(occurrence),
        })
        .collect()
}
