//! HIR tests
//!
//! Tests for:
//! - Symbol extraction
//! - Identifier classification and resolution
//! - Diagnostics passes

pub mod tests_diagnostics;
pub mod tests_symbol_extraction;
