//! Documents and document snapshots consumed by the analysis layers.
pub mod document;
pub mod document_set;

pub use document::{Document, IDL_EXTENSIONS, is_idl_file};
pub use document_set::DocumentSet;
