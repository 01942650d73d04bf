//! Analysis: IDE queries over a caller-supplied document snapshot.
//!
//! The caller owns the open documents and hands a `DocumentSet` to
//! `Analysis`. Every query on one `Analysis` sees the same set of
//! documents.
//!
//! ## Usage
//!
//! ```ignore
//! let mut documents = DocumentSet::new();
//! documents.set_file_content("file:///a.thrift", "struct User {}");
//!
//! let analysis = Analysis::new(&documents);
//! let diagnostics = analysis.diagnostics("file:///a.thrift");
//! ```

use smol_str::SmolStr;

use crate::base::{Position, Range};
use crate::hir::{Diagnostic, DiagnosticsConfig, DiagnosticsEngine};
use crate::syntax::{Document, DocumentSet};

use super::providers::{
    DiagnosticsProvider, HighlightProvider, Highlighter, ReferenceProvider, RenameEngine,
    RenameProvider, SymbolResolver,
};
use super::{DocumentHighlight, Location, RenameError, SymbolInfo, WorkspaceEdit};

/// An immutable snapshot of the open documents.
///
/// Queries name documents by URI; an unknown URI yields an empty result.
pub struct Analysis<'a> {
    documents: &'a DocumentSet,
    diagnostics: DiagnosticsEngine,
    resolver: SymbolResolver,
    renamer: RenameEngine,
    highlighter: Highlighter,
}

impl<'a> Analysis<'a> {
    /// Query `documents` with every diagnostics pass enabled.
    pub fn new(documents: &'a DocumentSet) -> Self {
        Self::with_config(documents, DiagnosticsConfig::default())
    }

    pub fn with_config(documents: &'a DocumentSet, config: DiagnosticsConfig) -> Self {
        Self {
            documents,
            diagnostics: DiagnosticsEngine::with_config(config),
            resolver: SymbolResolver,
            renamer: RenameEngine,
            highlighter: Highlighter,
        }
    }

    fn document(&self, uri: &str) -> Option<&'a Document> {
        self.documents.get(uri)
    }

    /// Get diagnostics for a document.
    pub fn diagnostics(&self, uri: &str) -> Vec<Diagnostic> {
        self.document(uri)
            .map(|document| self.diagnostics.diagnostics(document))
            .unwrap_or_default()
    }

    /// Find all references to the identifier at a position, across every
    /// open document.
    pub fn find_references(
        &self,
        uri: &str,
        position: Position,
        include_declaration: bool,
    ) -> Vec<Location> {
        self.document(uri)
            .map(|document| {
                self.resolver.find_references(
                    document,
                    position,
                    include_declaration,
                    self.documents,
                )
            })
            .unwrap_or_default()
    }

    pub fn prepare_rename(
        &self,
        uri: &str,
        position: Position,
    ) -> Result<(SmolStr, Range), RenameError> {
        let document = self
            .document(uri)
            .ok_or_else(|| RenameError::UnknownDocument(uri.to_string()))?;
        self.renamer.prepare_rename(document, position)
    }

    /// Rename the identifier at a position across every open document.
    pub fn rename(
        &self,
        uri: &str,
        position: Position,
        new_name: &str,
    ) -> Result<WorkspaceEdit, RenameError> {
        let document = self
            .document(uri)
            .ok_or_else(|| RenameError::UnknownDocument(uri.to_string()))?;
        self.renamer
            .rename(document, position, new_name, self.documents)
    }

    /// Highlight the identifier at a position within its document.
    pub fn highlights(&self, uri: &str, position: Position) -> Vec<DocumentHighlight> {
        self.document(uri)
            .map(|document| self.highlighter.highlights(document, position))
            .unwrap_or_default()
    }

    /// Get the outline of a document.
    pub fn document_symbols(&self, uri: &str) -> Vec<SymbolInfo> {
        self.document(uri)
            .map(super::document_symbols)
            .unwrap_or_default()
    }

    pub fn documents(&self) -> &DocumentSet {
        self.documents
    }
}
