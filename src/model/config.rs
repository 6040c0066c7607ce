//! Key declaration configuration

use super::target::TargetType;

/// Template configuration attached to a target type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyConfig {
    /// The key template text
    pub template: String,
    /// Character splitting partition key from sort key
    #[cfg_attr(feature = "interchange", serde(default))]
    pub primary_separator: Option<char>,
    /// Format and parse with the invariant culture
    #[cfg_attr(feature = "interchange", serde(default = "default_invariant_formatting"))]
    pub invariant_formatting: bool,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            template: String::new(),
            primary_separator: None,
            invariant_formatting: true,
        }
    }
}

impl KeyConfig {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    pub fn with_primary_separator(mut self, separator: char) -> Self {
        self.primary_separator = Some(separator);
        self
    }

    pub fn with_invariant_formatting(mut self, invariant: bool) -> Self {
        self.invariant_formatting = invariant;
        self
    }
}

#[cfg(feature = "interchange")]
fn default_invariant_formatting() -> bool {
    true
}

/// The unit of compilation: a target type and its key configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyDeclaration {
    pub target: TargetType,
    pub config: KeyConfig,
}

impl KeyDeclaration {
    pub fn new(target: TargetType, config: KeyConfig) -> Self {
        Self { target, config }
    }
}
