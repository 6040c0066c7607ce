//! Template token types

use smol_str::SmolStr;

use crate::base::{Name, TextRange};

/// One lexical element of a key template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum TemplateToken {
    /// The configured separator between partition and sort key.
    PrimaryDelimiter(char),
    /// Any other single non-alphanumeric character.
    Delimiter(char),
    /// `{Name}` or `{Name:format}`
    Property { name: Name, format: Option<SmolStr> },
    /// A letter/digit run.
    Constant(SmolStr),
    /// `{Name...,}` or `{Name...,:format}`
    RepeatingProperty {
        name: Name,
        separator: char,
        format: Option<SmolStr>,
    },
}

impl TemplateToken {
    /// Property name for property and repeating-property tokens
    pub fn property_name(&self) -> Option<&Name> {
        match self {
            Self::Property { name, .. } | Self::RepeatingProperty { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_primary_delimiter(&self) -> bool {
        matches!(self, Self::PrimaryDelimiter(_))
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Self::RepeatingProperty { .. })
    }
}

/// A token together with its location in the template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub value: TemplateToken,
    pub range: TextRange,
}

impl Token {
    pub fn new(value: TemplateToken, range: TextRange) -> Self {
        Self { value, range }
    }
}
