//! IDE features: high-level APIs for editor requests.
//!
//! This module provides the interface between the semantic model (HIR)
//! and a protocol layer. Each function corresponds to one editor request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No LSP types**: Uses our own types, converted at the LSP boundary
//! 3. **Explicit context**: Cross-file requests take the [`DocumentSet`](crate::syntax::DocumentSet) they search
//!
//! ## Usage
//!
//! ```ignore
//! use idlsense::DocumentSet;
//! use idlsense::ide::Analysis;
//!
//! let mut documents = DocumentSet::new();
//! documents.set_file_content("user.thrift", "struct User {}");
//!
//! let analysis = Analysis::new(&documents);
//! let symbols = analysis.document_symbols("user.thrift");
//! ```

mod analysis;
mod highlight;
mod providers;
mod references;
mod rename;
mod symbols;

pub use analysis::Analysis;
pub use highlight::{DocumentHighlight, HighlightKind, document_highlights};
pub use providers::{
    DiagnosticsProvider, HighlightProvider, Highlighter, ReferenceProvider, RenameEngine,
    RenameProvider, SymbolResolver,
};
pub use references::{Location, find_references};
pub use rename::{
    RenameError, TextEdit, WorkspaceEdit, is_renameable, prepare_rename, rename,
    validate_new_name,
};
pub use symbols::{SymbolInfo, document_symbols};
