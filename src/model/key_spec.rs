//! Key specifications and the assembler
//!
//! A key without a primary delimiter is a single-segment [`PrimaryKeySpec`].
//! A key with one is split into partition and sort sections around it.

use thiserror::Error;

use super::config::KeyConfig;
use super::key_part::KeyPart;

/// Single-segment key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct PrimaryKeySpec {
    pub parts: Vec<KeyPart>,
    pub invariant_formatting: bool,
}

/// Partition/sort key split at a primary delimiter.
///
/// Stores the full part list plus the delimiter position, so the sections
/// always concatenate back to [`Self::all_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositePrimaryKeySpec {
    all_parts: Vec<KeyPart>,
    delimiter_index: usize,
    invariant_formatting: bool,
}

impl CompositePrimaryKeySpec {
    /// Returns `None` unless `delimiter_index` points at a primary delimiter.
    pub fn new(
        all_parts: Vec<KeyPart>,
        delimiter_index: usize,
        invariant_formatting: bool,
    ) -> Option<Self> {
        if !all_parts.get(delimiter_index)?.is_primary_delimiter() {
            return None;
        }
        Some(Self {
            all_parts,
            delimiter_index,
            invariant_formatting,
        })
    }

    pub fn all_parts(&self) -> &[KeyPart] {
        &self.all_parts
    }

    pub fn partition_parts(&self) -> &[KeyPart] {
        &self.all_parts[..self.delimiter_index]
    }

    pub fn primary_delimiter_part(&self) -> &KeyPart {
        &self.all_parts[self.delimiter_index]
    }

    pub fn sort_parts(&self) -> &[KeyPart] {
        &self.all_parts[self.delimiter_index + 1..]
    }

    pub fn invariant_formatting(&self) -> bool {
        self.invariant_formatting
    }

    /// Exact partition key length, when every partition part is fixed-width
    pub fn partition_exact_length(&self) -> Option<usize> {
        exact_length(self.partition_parts())
    }

    /// Exact sort key length, when every sort part is fixed-width
    pub fn sort_exact_length(&self) -> Option<usize> {
        exact_length(self.sort_parts())
    }
}

/// Serialized as its sections, the shape a code generator walks.
#[cfg(feature = "interchange")]
impl serde::Serialize for CompositePrimaryKeySpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CompositePrimaryKeySpec", 4)?;
        state.serialize_field("partition_parts", self.partition_parts())?;
        state.serialize_field("primary_delimiter_part", self.primary_delimiter_part())?;
        state.serialize_field("sort_parts", self.sort_parts())?;
        state.serialize_field("invariant_formatting", &self.invariant_formatting)?;
        state.end()
    }
}

/// A finalized key specification.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum KeySpec {
    Primary(PrimaryKeySpec),
    Composite(CompositePrimaryKeySpec),
}

impl KeySpec {
    /// Every part, in template order
    pub fn parts(&self) -> &[KeyPart] {
        match self {
            Self::Primary(spec) => &spec.parts,
            Self::Composite(spec) => spec.all_parts(),
        }
    }

    pub fn invariant_formatting(&self) -> bool {
        match self {
            Self::Primary(spec) => spec.invariant_formatting,
            Self::Composite(spec) => spec.invariant_formatting(),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }

    /// Exact text length of every key, when all parts are fixed-width
    pub fn exact_length(&self) -> Option<usize> {
        exact_length(self.parts())
    }

    /// Sum of per-part minimum lengths; a buffer-sizing hint
    pub fn min_length(&self) -> usize {
        self.parts().iter().map(KeyPart::length_required).sum()
    }
}

fn exact_length(parts: &[KeyPart]) -> Option<usize> {
    parts
        .iter()
        .map(|part| part.exact_length_requirement().then(|| part.length_required()))
        .sum()
}

/// Why a part list could not be assembled into a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssembleError {
    #[error("primary separator '{separator}' is configured but never used in the template")]
    UnusedPrimarySeparator { separator: char },

    #[error("key has {count} primary delimiters, at most one is allowed")]
    MultiplePrimaryDelimiters { count: usize },
}

/// Organize parts into a primary or composite key spec.
pub fn assemble(parts: Vec<KeyPart>, config: &KeyConfig) -> Result<KeySpec, AssembleError> {
    let mut delimiters = parts
        .iter()
        .enumerate()
        .filter(|(_, part)| part.is_primary_delimiter())
        .map(|(idx, _)| idx);

    match (delimiters.next(), delimiters.next()) {
        (None, _) => match config.primary_separator {
            Some(separator) => Err(AssembleError::UnusedPrimarySeparator { separator }),
            None => Ok(KeySpec::Primary(PrimaryKeySpec {
                parts,
                invariant_formatting: config.invariant_formatting,
            })),
        },
        (Some(delimiter_index), None) => Ok(KeySpec::Composite(CompositePrimaryKeySpec {
            all_parts: parts,
            delimiter_index,
            invariant_formatting: config.invariant_formatting,
        })),
        (Some(_), Some(_)) => Err(AssembleError::MultiplePrimaryDelimiters {
            count: parts.iter().filter(|part| part.is_primary_delimiter()).count(),
        }),
    }
}
