//! Tokenization failures
//!
//! The tokenizer fails fast: the first malformed construct ends the scan
//! and no tokens are returned.

use thiserror::Error;

use crate::base::{Name, TextRange, TextSize};

/// Reasons a template cannot be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// Nothing to tokenize.
    #[error("template is empty")]
    EmptyTemplate,

    /// The configured separator can never be lexed as a single symbol.
    #[error("primary separator '{separator}' is not usable: it must lex as a single delimiter")]
    InvalidPrimarySeparator { separator: char },

    /// A `{` was never closed.
    #[error("property opened at {start:?} is never closed")]
    UnterminatedProperty { start: TextSize },

    /// A `{` appeared inside a property body.
    #[error("unexpected '{{' inside property at {range:?}")]
    NestedPropertyOpen { range: TextRange },

    /// `{}` or `{:format}`.
    #[error("property at {range:?} has no name")]
    EmptyPropertyName { range: TextRange },

    /// `{Name...}` with nothing after the marker.
    #[error("repeating property '{name}' has no separator after '...'")]
    MissingRepeatingSeparator { name: Name, range: TextRange },

    /// Text between the repeating separator and the format.
    #[error("unexpected text after the separator of repeating property '{name}'")]
    TrailingRepeatingText { name: Name, range: TextRange },

    /// `{Name:}`.
    #[error("property '{name}' has an empty format")]
    EmptyFormat { name: Name, range: TextRange },

    /// The primary separator may occur at most once.
    #[error("primary separator '{separator}' appears more than once")]
    DuplicatePrimarySeparator { separator: char, range: TextRange },
}

impl TokenizeError {
    /// Template location of the failure, when it has one
    pub fn range(&self) -> Option<TextRange> {
        match self {
            Self::EmptyTemplate | Self::InvalidPrimarySeparator { .. } => None,
            Self::UnterminatedProperty { start } => Some(TextRange::empty(*start)),
            Self::NestedPropertyOpen { range }
            | Self::EmptyPropertyName { range }
            | Self::MissingRepeatingSeparator { range, .. }
            | Self::TrailingRepeatingText { range, .. }
            | Self::EmptyFormat { range, .. }
            | Self::DuplicatePrimarySeparator { range, .. } => Some(*range),
        }
    }
}
