//! Diagnostics options

/// Which passes run, and what else counts as a builtin type
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiagnosticsConfig {
    /// Forward syntax errors from the parser
    pub parse_errors: bool,
    pub duplicate_definitions: bool,
    /// Duplicate and non-positive field ids
    pub field_ids: bool,
    /// Repeated enum values and service methods
    pub duplicate_members: bool,
    /// PascalCase types and UPPER_SNAKE_CASE constants
    pub naming_conventions: bool,
    /// Unknown names in field types
    pub type_references: bool,
    /// Type names accepted in addition to the builtin primitives, for
    /// dialects that add their own
    pub extra_builtin_types: Vec<String>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            parse_errors: true,
            duplicate_definitions: true,
            field_ids: true,
            duplicate_members: true,
            naming_conventions: true,
            type_references: true,
            extra_builtin_types: Vec::new(),
        }
    }
}

impl DiagnosticsConfig {
    /// Only the passes that report errors
    pub fn errors_only() -> Self {
        Self {
            naming_conventions: false,
            ..Self::default()
        }
    }

    pub fn with_builtin_type(mut self, name: impl Into<String>) -> Self {
        self.extra_builtin_types.push(name.into());
        self
    }
}
