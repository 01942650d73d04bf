//! Foundation types for the idlsense toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineIndex`] - Line/column conversion
//! - [`Position`], [`Range`] - Line/column positions for editor results
//!
//! This module has NO dependencies on other idlsense modules.

mod line_index;
mod position;

pub use line_index::LineIndex;
pub use position::{Position, Range};

pub use rowan::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
