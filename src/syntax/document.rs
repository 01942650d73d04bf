//! Document wrapper for parsed IDL sources.
//!
//! A `Document` is a snapshot of one source text: its URI, the raw text, the
//! parse tree (absent when the file is not an IDL file or the caller could not
//! parse it) and a line index for position conversion.

use crate::base::{LineIndex, Position, Range, TextRange, TextSize};
use crate::parser::{AstNode, Parse, SourceFile, SyntaxError, SyntaxNode, parse};

/// File extensions this engine analyzes
pub const IDL_EXTENSIONS: &[&str] = &["thrift", "frugal"];

/// Check whether a URI or path names a file this engine should analyze.
///
/// This is an extension check only; the content is never inspected.
pub fn is_idl_file(uri: &str) -> bool {
    let path = uri.split(['?', '#']).next().unwrap_or(uri);
    path.rsplit_once('.')
        .map(|(_, ext)| IDL_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// A parsed source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    uri: String,
    source: String,
    parse: Option<Parse>,
    line_index: LineIndex,
}

impl Document {
    /// Create a document, parsing it when `uri` names an IDL file.
    pub fn new(uri: impl Into<String>, source: impl Into<String>) -> Self {
        let uri = uri.into();
        let source = source.into();
        let parse = is_idl_file(&uri).then(|| parse(&source));
        let line_index = LineIndex::new(&source);
        Self {
            uri,
            source,
            parse,
            line_index,
        }
    }

    /// Create a document whose parse failed upstream; it has no tree.
    pub fn without_tree(uri: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let line_index = LineIndex::new(&source);
        Self {
            uri: uri.into(),
            source,
            parse: None,
            line_index,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Get the underlying parse result
    pub fn parse(&self) -> Option<&Parse> {
        self.parse.as_ref()
    }

    /// Get the root syntax node, if the document has a tree
    pub fn tree(&self) -> Option<SyntaxNode> {
        self.parse.as_ref().map(Parse::syntax)
    }

    /// Get the root source file AST node
    pub fn source_file(&self) -> Option<SourceFile> {
        self.tree().and_then(SourceFile::cast)
    }

    pub fn has_tree(&self) -> bool {
        self.parse.is_some()
    }

    /// Syntax errors reported by the parser (empty without a tree)
    pub fn syntax_errors(&self) -> &[SyntaxError] {
        self.parse.as_ref().map(|p| p.errors.as_slice()).unwrap_or(&[])
    }

    /// Convert an editor position to a byte offset
    pub fn offset(&self, position: Position) -> Option<TextSize> {
        self.line_index.offset(position)
    }

    /// Convert a byte range to an editor range
    pub fn range(&self, range: TextRange) -> Range {
        self.line_index.range(range)
    }

    /// Editor range of a syntax node
    pub fn node_range(&self, node: &SyntaxNode) -> Range {
        self.range(node.text_range())
    }
}
