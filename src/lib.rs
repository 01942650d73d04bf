//! # idlsense-base
//!
//! Symbol resolution and semantic diagnostics for Thrift/Frugal IDL files.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (references, rename, highlights, outline)
//!   ↓
//! hir       → Symbols, identifier classification, diagnostics
//!   ↓
//! syntax    → Document and DocumentSet snapshots
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, typed AST
//!   ↓
//! base      → Primitives (Position, Range, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → hir → ide)
// ============================================================================

/// Foundation types: Position, Range, LineIndex
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST
pub mod parser;

/// Syntax: documents and the caller's document set
pub mod syntax;

/// High-level IR: symbols, classification, diagnostics
pub mod hir;

/// IDE features: find-references, rename, highlights, document symbols
pub mod ide;

// Re-export commonly needed items
pub use parser::keywords;

// Re-export foundation types
pub use base::{LineIndex, Position, Range, TextRange, TextSize};
pub use syntax::{Document, DocumentSet};
