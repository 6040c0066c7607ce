//! Diagnostic types and the diagnostic collector

use std::fmt;

use thiserror::Error;

use super::codes::DiagnosticCode;
use crate::base::{Name, TextRange};
use crate::model::{AssembleError, PartError, TargetType};
use crate::parser::TokenizeError;

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Stable code
    pub code: DiagnosticCode,
    /// Human-readable message
    pub message: String,
    /// Offending template range, if the finding has one
    pub range: Option<TextRange>,
    /// Offending property or type name
    pub subject: Option<Name>,
    /// Optional suggestion for fixing the problem
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic with only a code and message
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            range: None,
            subject: None,
            hint: None,
        }
    }

    /// Create a diagnostic carrying the code's default message
    pub fn from_code(code: DiagnosticCode) -> Self {
        Self::new(code, code.default_message())
    }

    /// Set the template range
    pub fn at(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the offending name
    pub fn with_subject(mut self, subject: impl Into<Name>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Add a hint
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.code, self.message);
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A non-empty set of diagnostics for one target type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
#[error("{}", summarize(.0))]
pub struct Diagnostics(Vec<Diagnostic>);

#[allow(clippy::len_without_is_empty)] // never empty
impl Diagnostics {
    /// Returns `None` for an empty list.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Option<Self> {
        if diagnostics.is_empty() {
            None
        } else {
            Some(Self(diagnostics))
        }
    }

    pub fn single(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }

    /// Codes in report order
    pub fn codes(&self) -> Vec<DiagnosticCode> {
        self.0.iter().map(|d| d.code).collect()
    }

    pub fn contains(&self, code: DiagnosticCode) -> bool {
        self.0.iter().any(|d| d.code == code)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<AssembleError> for Diagnostics {
    fn from(err: AssembleError) -> Self {
        let mut collector = DiagnosticCollector::new();
        collector.assemble_error(&err);
        Self(collector.into_vec())
    }
}

impl From<&TokenizeError> for Diagnostics {
    fn from(err: &TokenizeError) -> Self {
        let mut collector = DiagnosticCollector::new();
        collector.tokenization_failure(err);
        Self(collector.into_vec())
    }
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(Diagnostic::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Which accessor a property role needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Formatting reads the property
    Read,
    /// Parsing assigns the property
    Write,
}

/// Collects diagnostics during validation.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// `Ok` when nothing was collected.
    pub fn finish(self) -> Result<(), Diagnostics> {
        match Diagnostics::new(self.diagnostics) {
            Some(diagnostics) => Err(diagnostics),
            None => Ok(()),
        }
    }

    /// Add an unsupported target shape error.
    pub fn unsupported_target_shape(&mut self, target: &TargetType) {
        self.add(
            Diagnostic::new(
                DiagnosticCode::UnsupportedTargetShape,
                format!(
                    "'{}' is {} {}; keys can only be declared on classes, records and structs",
                    target.name,
                    article(target.shape.as_str()),
                    target.shape.as_str()
                ),
            )
            .with_subject(target.name.clone()),
        );
    }

    /// Add a target-not-partial error.
    pub fn target_not_partial(&mut self, target: &TargetType) {
        self.add(
            Diagnostic::new(
                DiagnosticCode::TargetNotPartial,
                format!("'{}' must be declared partial", target.name),
            )
            .with_subject(target.name.clone())
            .with_hint("add the 'partial' modifier to the declaration"),
        );
    }

    /// Add a no-matching-constructor error.
    pub fn no_matching_constructor(&mut self, target: &TargetType) {
        self.add(
            Diagnostic::new(
                DiagnosticCode::AmbiguousConstructor,
                format!(
                    "no constructor of '{}' can be called with the template properties",
                    target.name
                ),
            )
            .with_subject(target.name.clone())
            .with_hint("add a constructor whose parameters are all template properties"),
        );
    }

    /// Add an ambiguous constructor error.
    pub fn ambiguous_constructor(&mut self, target: &TargetType, candidates: usize) {
        self.add(
            Diagnostic::new(
                DiagnosticCode::AmbiguousConstructor,
                format!(
                    "{} constructors of '{}' match the template properties equally well",
                    candidates, target.name
                ),
            )
            .with_subject(target.name.clone()),
        );
    }

    /// Add a tokenization failure.
    pub fn tokenization_failure(&mut self, err: &TokenizeError) {
        let mut diagnostic = Diagnostic::new(
            DiagnosticCode::TokenizationFailure,
            format!("invalid key template: {}", err),
        );
        if let Some(range) = err.range() {
            diagnostic = diagnostic.at(range);
        }
        self.add(diagnostic);
    }

    /// Add an unused primary separator error.
    pub fn unused_primary_separator(&mut self, separator: char) {
        self.add(
            Diagnostic::new(
                DiagnosticCode::UnusedPrimarySeparator,
                format!("primary separator '{}' does not appear in the template", separator),
            )
            .with_hint("use the separator between partition and sort key, or remove it"),
        );
    }

    /// Add the diagnostic for a part that failed to build.
    pub fn part_error(&mut self, err: &PartError) {
        let code = match err {
            PartError::UnresolvedProperty { .. } => DiagnosticCode::UnresolvedProperty,
            PartError::InvalidFormat { .. } => DiagnosticCode::InvalidFormatForType,
            PartError::NonCollectionRepeating { .. } => {
                DiagnosticCode::NonCollectionRepeatingProperty
            }
            PartError::CollectionMissingMarker { .. } => {
                DiagnosticCode::CollectionMissingRepeatingMarker
            }
            PartError::UnsupportedType { .. } => DiagnosticCode::UnsupportedPropertyType,
        };
        let mut diagnostic = Diagnostic::new(code, err.to_string())
            .at(err.range())
            .with_subject(err.name().clone());
        if let PartError::CollectionMissingMarker { name, .. } = err {
            diagnostic = diagnostic.with_hint(format!("write '{{{}...,}}' with a separator", name));
        }
        self.add(diagnostic);
    }

    /// Add an inaccessible property error.
    pub fn inaccessible_property(&mut self, name: &Name, range: TextRange, access: Access) {
        let message = match access {
            Access::Read => format!(
                "property '{}' has no getter, so the key cannot be formatted",
                name
            ),
            Access::Write => format!(
                "property '{}' has no setter or constructor parameter, so the key cannot be parsed",
                name
            ),
        };
        self.add(
            Diagnostic::new(DiagnosticCode::InaccessibleProperty, message)
                .at(range)
                .with_subject(name.clone()),
        );
    }

    /// Add a misplaced repeating part error.
    pub fn misplaced_repeating_part(&mut self, name: &Name, range: TextRange, section: &str) {
        self.add(
            Diagnostic::new(
                DiagnosticCode::MisplacedRepeatingPart,
                format!("repeating property '{}' must be the last part of the {}", name, section),
            )
            .at(range)
            .with_subject(name.clone()),
        );
    }

    /// Add the diagnostic for an assembler failure.
    pub fn assemble_error(&mut self, err: &AssembleError) {
        match err {
            AssembleError::UnusedPrimarySeparator { separator } => {
                self.unused_primary_separator(*separator)
            }
            AssembleError::MultiplePrimaryDelimiters { .. } => self.add(Diagnostic::new(
                DiagnosticCode::TokenizationFailure,
                err.to_string(),
            )),
        }
    }
}

fn article(word: &str) -> &'static str {
    match word.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
