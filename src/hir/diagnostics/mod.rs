//! Diagnostics: semantic error reporting.
//!
//! The engine runs a fixed pipeline of independent passes over one document
//! and concatenates their results. A pass never sees another pass's output
//! and never stops the others from running.
//!
//! ## Passes
//!
//! | Pass                  | Severity | Code         |
//! |-----------------------|----------|--------------|
//! | parse errors          | Error    | E0001        |
//! | duplicate definitions | Error    | E0002        |
//! | field ids             | Error    | E0003, E0004 |
//! | duplicate members     | Error    | E0006        |
//! | naming conventions    | Warning  | W0001        |
//! | unknown types         | Error    | E0005        |

mod config;
mod duplicates;
mod field_ids;
mod naming;
mod parse_errors;
mod type_refs;

use smol_str::SmolStr;

use crate::base::Range;
use crate::syntax::Document;

pub use config::DiagnosticsConfig;
pub use duplicates::{duplicate_definitions, duplicate_members};
pub use field_ids::field_ids;
pub use naming::{is_pascal_case, is_upper_snake_case, naming_conventions};
pub use parse_errors::parse_errors;
pub use type_refs::{known_types, unknown_types};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    pub range: Range,
    pub severity: Severity,
    /// Stable code (e.g., "E0002").
    pub code: Option<SmolStr>,
    pub message: String,
    pub related: Vec<RelatedInfo>,
}

/// A location related to a diagnostic, such as the first of two duplicates.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelatedInfo {
    pub uri: String,
    pub range: Range,
    pub message: String,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(range: Range, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, range, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(range: Range, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, range, message)
    }

    fn new(severity: Severity, range: Range, message: impl Into<String>) -> Self {
        Self {
            range,
            severity,
            code: None,
            message: message.into(),
            related: Vec::new(),
        }
    }

    /// Set the error code.
    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(SmolStr::new(code));
        self
    }

    /// Add related information.
    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Stable diagnostic codes.
///
/// - **E0001-E0099**: errors
/// - **W0001-W0099**: warnings
pub mod codes {
    /// Syntax error reported by the parser.
    pub const PARSE_ERROR: &str = "E0001";
    /// Two definitions of the same kind share a name.
    pub const DUPLICATE_DEFINITION: &str = "E0002";
    /// A field id repeats within one field-id namespace.
    pub const DUPLICATE_FIELD_ID: &str = "E0003";
    /// A field id is zero or negative.
    pub const NON_POSITIVE_FIELD_ID: &str = "E0004";
    /// A field type names no known type.
    pub const UNKNOWN_TYPE: &str = "E0005";
    /// An enum value or service method repeats within its parent.
    pub const DUPLICATE_MEMBER: &str = "E0006";

    /// Naming convention violation.
    pub const NAMING_CONVENTION: &str = "W0001";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects the diagnostics of one pass over one document.
#[derive(Clone, Debug)]
pub struct DiagnosticCollector {
    uri: String,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create an empty collector for the document at `uri`.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            diagnostics: Vec::new(),
        }
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Related information pointing into the collector's document.
    pub fn related(&self, range: Range, message: impl Into<String>) -> RelatedInfo {
        RelatedInfo {
            uri: self.uri.clone(),
            range,
            message: message.into(),
        }
    }

    /// Add a repeated-name error related to the first occurrence.
    pub fn duplicate(
        &mut self,
        code: &str,
        range: Range,
        message: String,
        first: Range,
        first_message: String,
    ) {
        let related = self.related(first, first_message);
        self.add(Diagnostic::error(range, message).with_code(code).with_related(related));
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Runs the enabled passes over a document.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticsEngine {
    config: DiagnosticsConfig,
}

impl DiagnosticsEngine {
    /// Create an engine with every pass enabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiagnosticsConfig {
        &self.config
    }

    /// Run every enabled pass and concatenate the results.
    ///
    /// Documents without a tree produce no diagnostics.
    pub fn check(&self, document: &Document) -> Vec<Diagnostic> {
        if !document.has_tree() {
            tracing::trace!(uri = document.uri(), "no tree, skipping diagnostics");
            return Vec::new();
        }

        let config = &self.config;
        let mut diagnostics = Vec::new();
        if config.parse_errors {
            diagnostics.extend(parse_errors(document));
        }
        if config.duplicate_definitions {
            diagnostics.extend(duplicate_definitions(document));
        }
        if config.field_ids {
            diagnostics.extend(field_ids(document));
        }
        if config.duplicate_members {
            diagnostics.extend(duplicate_members(document));
        }
        if config.naming_conventions {
            diagnostics.extend(naming_conventions(document));
        }
        if config.type_references {
            diagnostics.extend(unknown_types(document, &config.extra_builtin_types));
        }

        tracing::debug!(
            uri = document.uri(),
            count = diagnostics.len(),
            "computed diagnostics"
        );
        diagnostics
    }
}

/// Check a document with the default configuration.
pub fn check_document(document: &Document) -> Vec<Diagnostic> {
    DiagnosticsEngine::new().check(document)
}
