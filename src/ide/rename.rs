//! Rename: validation and edit-batch construction.
//!
//! A rename replaces every occurrence of the identifier under the cursor,
//! across the origin document and the supplied document set. Occurrences
//! are matched by text, so unrelated members that happen to share the name
//! are renamed too.

use indexmap::IndexMap;
use smol_str::SmolStr;
use thiserror::Error;

use crate::base::{Position, Range};
use crate::hir::{ResolvedName, symbol_at};
use crate::parser::keywords::{is_builtin_type, is_keyword};
use crate::syntax::{Document, DocumentSet};

use super::references::find_references;

/// Why a rename was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    /// The cursor is not on an identifier.
    #[error("No symbol found at the given position")]
    NoSymbol,

    /// The request named a document the caller does not know.
    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    /// Builtin types, keywords and qualified names cannot be renamed.
    #[error("'{0}' cannot be renamed")]
    NotRenameable(SmolStr),

    #[error("New name must not be empty")]
    EmptyName,

    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),

    #[error("'{0}' is a reserved keyword")]
    ReservedKeyword(String),

    #[error("'{0}' is a builtin type name")]
    BuiltinType(String),

    /// The new name equals the current one.
    #[error("'{0}' already has that name")]
    SameName(String),
}

/// A replacement of one range with new text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

/// Text edits grouped by document URI, in the order documents were visited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkspaceEdit {
    pub changes: IndexMap<String, Vec<TextEdit>>,
}

impl WorkspaceEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, uri: impl Into<String>, edit: TextEdit) {
        self.changes.entry(uri.into()).or_default().push(edit);
    }

    /// Edits for one document, empty if it is untouched
    pub fn edits(&self, uri: &str) -> &[TextEdit] {
        self.changes.get(uri).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of edits across all documents
    pub fn edit_count(&self) -> usize {
        self.changes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Check that `name` can be used as a new identifier.
pub fn validate_new_name(name: &str) -> Result<(), RenameError> {
    if name.trim().is_empty() {
        return Err(RenameError::EmptyName);
    }
    if !is_identifier(name) {
        return Err(RenameError::InvalidIdentifier(name.to_string()));
    }
    if is_keyword(name) {
        return Err(RenameError::ReservedKeyword(name.to_string()));
    }
    if is_builtin_type(name) {
        return Err(RenameError::BuiltinType(name.to_string()));
    }
    Ok(())
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whether the identifier `name` may be renamed.
///
/// Builtin types and keywords belong to the language. Qualified names
/// (`shared.User`) point into another document and are renamed from there.
pub fn is_renameable(name: &str) -> bool {
    !is_keyword(name) && !is_builtin_type(name) && !name.contains('.')
}

fn renameable_symbol_at(
    document: &Document,
    position: Position,
) -> Result<ResolvedName, RenameError> {
    let resolved = symbol_at(document, position).ok_or(RenameError::NoSymbol)?;
    if !is_renameable(&resolved.name) {
        return Err(RenameError::NotRenameable(resolved.name));
    }
    Ok(resolved)
}

/// Check that the identifier at `position` can be renamed, returning its
/// name and range.
pub fn prepare_rename(
    document: &Document,
    position: Position,
) -> Result<(SmolStr, Range), RenameError> {
    let resolved = renameable_symbol_at(document, position)?;
    Ok((resolved.name, resolved.range))
}

/// Rename the identifier at `position` to `new_name` everywhere it occurs.
///
/// Every occurrence, declarations included, gets exactly one edit.
pub fn rename(
    document: &Document,
    position: Position,
    new_name: &str,
    documents: &DocumentSet,
) -> Result<WorkspaceEdit, RenameError> {
    let resolved = renameable_symbol_at(document, position)?;
    validate_new_name(new_name)?;
    if resolved.name == new_name {
        return Err(RenameError::SameName(new_name.to_string()));
    }

    let mut edit = WorkspaceEdit::new();
    for location in find_references(document, position, true, documents) {
        edit.push(
            location.uri,
            TextEdit {
                range: location.range,
                new_text: new_name.to_string(),
            },
        );
    }

    tracing::debug!(
        from = %resolved.name,
        to = new_name,
        documents = edit.changes.len(),
        edits = edit.edit_count(),
        "built rename"
    );
    Ok(edit)
}
