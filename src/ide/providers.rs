//! Provider traits: one narrow capability each.
//!
//! Each provider is a stateless value. Callers that want to swap an
//! implementation (for example a stricter, scope-aware resolver) depend on
//! the trait instead of the free functions.

use smol_str::SmolStr;

use crate::base::{Position, Range};
use crate::hir::{Diagnostic, DiagnosticsEngine};
use crate::syntax::{Document, DocumentSet};

use super::highlight::{DocumentHighlight, document_highlights};
use super::references::{Location, find_references};
use super::rename::{RenameError, WorkspaceEdit, prepare_rename, rename};

pub trait ReferenceProvider {
    fn find_references(
        &self,
        document: &Document,
        position: Position,
        include_declaration: bool,
        documents: &DocumentSet,
    ) -> Vec<Location>;
}

pub trait DiagnosticsProvider {
    fn diagnostics(&self, document: &Document) -> Vec<Diagnostic>;
}

pub trait RenameProvider {
    fn prepare_rename(
        &self,
        document: &Document,
        position: Position,
    ) -> Result<(SmolStr, Range), RenameError>;

    fn rename(
        &self,
        document: &Document,
        position: Position,
        new_name: &str,
        documents: &DocumentSet,
    ) -> Result<WorkspaceEdit, RenameError>;
}

pub trait HighlightProvider {
    fn highlights(&self, document: &Document, position: Position) -> Vec<DocumentHighlight>;
}

/// Text-matching reference finder.
#[derive(Clone, Copy, Debug, Default)]
pub struct SymbolResolver;

impl ReferenceProvider for SymbolResolver {
    fn find_references(
        &self,
        document: &Document,
        position: Position,
        include_declaration: bool,
        documents: &DocumentSet,
    ) -> Vec<Location> {
        find_references(document, position, include_declaration, documents)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RenameEngine;

impl RenameProvider for RenameEngine {
    fn prepare_rename(
        &self,
        document: &Document,
        position: Position,
    ) -> Result<(SmolStr, Range), RenameError> {
        prepare_rename(document, position)
    }

    fn rename(
        &self,
        document: &Document,
        position: Position,
        new_name: &str,
        documents: &DocumentSet,
    ) -> Result<WorkspaceEdit, RenameError> {
        rename(document, position, new_name, documents)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Highlighter;

impl HighlightProvider for Highlighter {
    fn highlights(&self, document: &Document, position: Position) -> Vec<DocumentHighlight> {
        document_highlights(document, position)
    }
}

impl DiagnosticsProvider for DiagnosticsEngine {
    fn diagnostics(&self, document: &Document) -> Vec<Diagnostic> {
        self.check(document)
    }
}
