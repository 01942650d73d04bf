//! High-level IR (HIR): semantic model over the syntax tree.
//!
//! Everything here is a pure function of one document (or, for reference
//! search, a caller-supplied [`DocumentSet`](crate::syntax::DocumentSet)).
//! Nothing is cached: each query re-derives what it needs from the current
//! tree.
//!
//! ## Key Types
//!
//! - [`Symbol`]: A named top-level definition
//! - [`IdentifierRole`]: Whether an identifier declares or refers
//! - [`ResolvedName`]: The identifier under a cursor
//! - [`Diagnostic`]: A semantic error or warning
//! - [`DiagnosticsEngine`]: Runs the diagnostics passes
//!
//! ## Query Layers
//!
//! ```text
//! tree                      ← INPUT: parsed document
//!     │
//!     ▼
//! extract_symbols(tree)     ← top-level definitions, pre-order
//!     │
//!     ▼
//! classify(name)            ← declaration / type reference / reference
//!     │
//!     ▼
//! symbol_at(doc, position)  ← identifier under the cursor
//!     │
//!     ▼
//! check_document(doc)       ← semantic errors
//! ```

mod classify;
mod diagnostics;
mod resolve;
mod symbols;

pub use classify::{IdentifierRole, classify};
pub use diagnostics::{
    Diagnostic, DiagnosticCollector, DiagnosticsConfig, DiagnosticsEngine, RelatedInfo, Severity,
    check_document, codes, duplicate_definitions, duplicate_members, field_ids, is_pascal_case,
    is_upper_snake_case, known_types, naming_conventions, parse_errors, unknown_types,
};
pub use resolve::{Occurrence, ResolvedName, find_occurrences, name_at_offset, symbol_at};
pub use symbols::{Symbol, SymbolKind, declared_name, extract_symbols};
