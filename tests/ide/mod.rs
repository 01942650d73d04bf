//! IDE feature tests
//!
//! Tests for:
//! - Find references
//! - Rename
//! - Document highlights
//! - Document symbols

pub mod tests_highlights;
pub mod tests_references;
pub mod tests_rename;
pub mod tests_symbols;
