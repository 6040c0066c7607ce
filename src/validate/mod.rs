//! Validator: enumerates every structural error of a key declaration.
//!
//! Unlike the tokenizer, validation never stops at the first problem: each
//! check adds to a [`DiagnosticCollector`] and the declaration is accepted
//! only when nothing was collected.
//!
//! Conditions checked:
//! - target shape and partial modifier
//! - tokenization
//! - primary separator usage
//! - property resolution, format and collection usage (from the model builder)
//! - constructor selection and property accessors
//! - repeating part placement

mod constructor;

use indexmap::IndexMap;
use tracing::trace;

pub use constructor::{ConstructorChoice, ConstructorError, select_constructor};

use crate::base::{Name, TextRange};
use crate::diagnostics::{Access, DiagnosticCollector, Diagnostics};
use crate::model::{KeyDeclaration, KeyParts, TargetType};
use crate::parser::{TemplateToken, Token, TokenizeError};

/// Validates one key declaration.
pub struct Validator<'a> {
    declaration: &'a KeyDeclaration,
    collector: DiagnosticCollector,
}

impl<'a> Validator<'a> {
    pub fn new(declaration: &'a KeyDeclaration) -> Self {
        Self {
            declaration,
            collector: DiagnosticCollector::new(),
        }
    }

    fn target(&self) -> &'a TargetType {
        &self.declaration.target
    }

    /// Target shape and partial modifier.
    pub fn check_target(&mut self) {
        let target = self.target();
        if !target.shape.is_augmentable() {
            self.collector.unsupported_target_shape(target);
        }
        if !target.is_partial {
            self.collector.target_not_partial(target);
        }
    }

    /// Record a failed tokenization.
    pub fn tokenization_failed(&mut self, err: &TokenizeError) {
        self.collector.tokenization_failure(err);
    }

    /// Checks that only need the token sequence and the target metadata.
    pub fn check_tokens(&mut self, tokens: &[Token]) {
        self.check_primary_separator(tokens);
        self.check_members(tokens);
        self.check_repeating_placement(tokens);
    }

    /// Report every token the model builder could not turn into a part.
    pub fn check_parts(&mut self, parts: &KeyParts) {
        for err in &parts.errors {
            self.collector.part_error(err);
        }
    }

    /// `Ok` when no condition fired.
    pub fn finish(self) -> Result<(), Diagnostics> {
        trace!(
            ty = %self.declaration.target.name,
            diagnostics = self.collector.len(),
            "validation finished"
        );
        self.collector.finish()
    }

    fn check_primary_separator(&mut self, tokens: &[Token]) {
        if let Some(separator) = self.declaration.config.primary_separator {
            if !tokens.iter().any(|t| t.value.is_primary_delimiter()) {
                self.collector.unused_primary_separator(separator);
            }
        }
    }

    /// Constructor selection, then getter/setter availability per property.
    fn check_members(&mut self, tokens: &[Token]) {
        let target = self.target();
        let referenced = referenced_properties(target, tokens);
        let names: Vec<&str> = referenced.keys().map(|name| name.as_str()).collect();

        let choice = match select_constructor(target, &names) {
            Ok(choice) => Some(choice),
            Err(ConstructorError::NoMatch) => {
                self.collector.no_matching_constructor(target);
                None
            }
            Err(ConstructorError::Ambiguous { candidates }) => {
                self.collector.ambiguous_constructor(target, candidates);
                None
            }
        };

        for (name, range) in referenced {
            let Some(property) = target.property(name) else {
                continue;
            };
            if !property.is_readable() {
                self.collector.inaccessible_property(name, range, Access::Read);
            }
            if let Some(choice) = &choice {
                if !property.is_writable() && !choice.binds(name) {
                    self.collector.inaccessible_property(name, range, Access::Write);
                }
            }
        }
    }

    fn check_repeating_placement(&mut self, tokens: &[Token]) {
        let composite = tokens.iter().any(|t| t.value.is_primary_delimiter());
        let sections = tokens.split(|t| t.value.is_primary_delimiter());

        for (idx, section) in sections.enumerate() {
            let label = match (composite, idx) {
                (false, _) => "key",
                (true, 0) => "partition key",
                (true, _) => "sort key",
            };
            let Some((_, leading)) = section.split_last() else {
                continue;
            };
            for token in leading {
                if let TemplateToken::RepeatingProperty { name, .. } = &token.value {
                    self.collector.misplaced_repeating_part(name, token.range, label);
                }
            }
        }
    }
}

/// Declared properties named by the template, first occurrence order.
fn referenced_properties<'t>(
    target: &TargetType,
    tokens: &'t [Token],
) -> IndexMap<&'t Name, TextRange> {
    let mut referenced = IndexMap::new();
    for token in tokens {
        if let Some(name) = token.value.property_name() {
            if target.property(name).is_some() {
                referenced.entry(name).or_insert(token.range);
            }
        }
    }
    referenced
}
