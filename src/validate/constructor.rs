//! Constructor selection for parsed keys
//!
//! Parsing builds the target through a constructor. A constructor is a
//! candidate when every parameter binds a template property; the candidate
//! with the most parameters wins.

use crate::model::{Constructor, TargetType};

/// The constructor generated parse code will call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorChoice<'a> {
    /// No constructors declared: the implicit parameterless one
    Implicit,
    Declared(&'a Constructor),
}

impl ConstructorChoice<'_> {
    /// Whether the property is assigned through a constructor parameter
    pub fn binds(&self, property: &str) -> bool {
        match self {
            Self::Implicit => false,
            Self::Declared(constructor) => constructor.binds(property),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorError {
    NoMatch,
    Ambiguous { candidates: usize },
}

/// Pick the constructor for the given template properties.
pub fn select_constructor<'a>(
    target: &'a TargetType,
    properties: &[&str],
) -> Result<ConstructorChoice<'a>, ConstructorError> {
    if target.constructors.is_empty() {
        return Ok(ConstructorChoice::Implicit);
    }

    let mut candidates: Vec<&Constructor> = target
        .constructors
        .iter()
        .filter(|ctor| {
            ctor.parameters
                .iter()
                .all(|param| properties.iter().any(|prop| param.eq_ignore_ascii_case(prop)))
        })
        .collect();

    let Some(widest) = candidates.iter().map(|ctor| ctor.parameters.len()).max() else {
        return Err(ConstructorError::NoMatch);
    };
    candidates.retain(|ctor| ctor.parameters.len() == widest);

    match candidates.as_slice() {
        [only] => Ok(ConstructorChoice::Declared(*only)),
        _ => Err(ConstructorError::Ambiguous {
            candidates: candidates.len(),
        }),
    }
}
