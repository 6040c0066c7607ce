//! Key parts
//!
//! One classified part per template token. Literal parts map directly;
//! property parts are resolved against the target type and classified
//! with a parse/format strategy.

use smol_str::SmolStr;
use thiserror::Error;

use super::strategy::{ClassifyError, FormatStrategy, ParseStrategy, classify};
use super::target::{PropertyInfo, TargetType, TypeInfo};
use crate::base::{Name, TextRange};
use crate::parser::{TemplateToken, Token};

/// A literal letter/digit run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct ConstantKeyPart {
    pub value: SmolStr,
    pub range: TextRange,
}

/// A single delimiter character (plain or primary).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct DelimiterKeyPart {
    pub value: char,
    pub range: TextRange,
}

/// A scalar property.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct PropertyKeyPart {
    pub property: PropertyInfo,
    pub format: Option<SmolStr>,
    pub parse_strategy: ParseStrategy,
    pub format_strategy: FormatStrategy,
    pub length_required: usize,
    pub exact_length_requirement: bool,
    pub range: TextRange,
}

/// A collection property whose elements are joined by `separator`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct RepeatingPropertyKeyPart {
    pub property: PropertyInfo,
    pub separator: char,
    pub format: Option<SmolStr>,
    pub inner_parse_strategy: ParseStrategy,
    pub inner_format_strategy: FormatStrategy,
    pub inner_type: TypeInfo,
    /// Minimum length of one element
    pub length_required: usize,
    pub range: TextRange,
}

/// One classified segment of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum KeyPart {
    Constant(ConstantKeyPart),
    Delimiter(DelimiterKeyPart),
    PrimaryDelimiter(DelimiterKeyPart),
    Property(PropertyKeyPart),
    RepeatingProperty(RepeatingPropertyKeyPart),
}

impl KeyPart {
    /// Exact length when [`Self::exact_length_requirement`], otherwise a minimum
    pub fn length_required(&self) -> usize {
        match self {
            Self::Constant(part) => part.value.chars().count(),
            Self::Delimiter(_) | Self::PrimaryDelimiter(_) => 1,
            Self::Property(part) => part.length_required,
            Self::RepeatingProperty(part) => part.length_required,
        }
    }

    pub fn exact_length_requirement(&self) -> bool {
        match self {
            Self::Constant(_) | Self::Delimiter(_) | Self::PrimaryDelimiter(_) => true,
            Self::Property(part) => part.exact_length_requirement,
            Self::RepeatingProperty(_) => false,
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            Self::Constant(part) => part.range,
            Self::Delimiter(part) | Self::PrimaryDelimiter(part) => part.range,
            Self::Property(part) => part.range,
            Self::RepeatingProperty(part) => part.range,
        }
    }

    /// The resolved property, for property parts
    pub fn property(&self) -> Option<&PropertyInfo> {
        match self {
            Self::Property(part) => Some(&part.property),
            Self::RepeatingProperty(part) => Some(&part.property),
            _ => None,
        }
    }

    pub fn is_primary_delimiter(&self) -> bool {
        matches!(self, Self::PrimaryDelimiter(_))
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Self::RepeatingProperty(_))
    }
}

/// A token that could not become a key part.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartError {
    #[error("'{name}' is not a property of the target type")]
    UnresolvedProperty { name: Name, range: TextRange },

    #[error("format '{format}' is not valid for property '{name}' of type '{type_name}'")]
    InvalidFormat {
        name: Name,
        type_name: Name,
        format: SmolStr,
        range: TextRange,
    },

    #[error("property '{name}' of type '{type_name}' is not a collection and cannot repeat")]
    NonCollectionRepeating {
        name: Name,
        type_name: Name,
        range: TextRange,
    },

    #[error("collection property '{name}' of type '{type_name}' needs a repeating marker")]
    CollectionMissingMarker {
        name: Name,
        type_name: Name,
        range: TextRange,
    },

    #[error("property '{name}' of type '{type_name}' cannot be parsed from a key")]
    UnsupportedType {
        name: Name,
        type_name: Name,
        range: TextRange,
    },
}

impl PartError {
    /// The offending property name
    pub fn name(&self) -> &Name {
        match self {
            Self::UnresolvedProperty { name, .. }
            | Self::InvalidFormat { name, .. }
            | Self::NonCollectionRepeating { name, .. }
            | Self::CollectionMissingMarker { name, .. }
            | Self::UnsupportedType { name, .. } => name,
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            Self::UnresolvedProperty { range, .. }
            | Self::InvalidFormat { range, .. }
            | Self::NonCollectionRepeating { range, .. }
            | Self::CollectionMissingMarker { range, .. }
            | Self::UnsupportedType { range, .. } => *range,
        }
    }
}

/// Output of the model builder: the parts that resolved, and why the rest did not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyParts {
    pub parts: Vec<KeyPart>,
    pub errors: Vec<PartError>,
}

impl KeyParts {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Resolve every token against the target type.
pub fn build_key_parts(tokens: &[Token], target: &TargetType) -> KeyParts {
    let mut built = KeyParts::default();
    for token in tokens {
        match build_key_part(token, target) {
            Ok(part) => built.parts.push(part),
            Err(err) => built.errors.push(err),
        }
    }
    built
}

/// Resolve a single token.
pub fn build_key_part(token: &Token, target: &TargetType) -> Result<KeyPart, PartError> {
    let range = token.range;
    let part = match &token.value {
        TemplateToken::Constant(value) => KeyPart::Constant(ConstantKeyPart {
            value: value.clone(),
            range,
        }),
        TemplateToken::Delimiter(value) => {
            KeyPart::Delimiter(DelimiterKeyPart { value: *value, range })
        }
        TemplateToken::PrimaryDelimiter(value) => {
            KeyPart::PrimaryDelimiter(DelimiterKeyPart { value: *value, range })
        }
        TemplateToken::Property { name, format } => {
            let property = resolve(target, name, range)?;
            let class = classify(&property.ty, format.as_deref()).map_err(|err| match err {
                ClassifyError::Collection => PartError::CollectionMissingMarker {
                    name: name.clone(),
                    type_name: property.ty.name.clone(),
                    range,
                },
                err => classify_error(err, property, &property.ty, format.as_ref(), range),
            })?;

            KeyPart::Property(PropertyKeyPart {
                property: property.clone(),
                format: format.clone(),
                parse_strategy: class.parse,
                format_strategy: class.format,
                length_required: class.length_required,
                exact_length_requirement: class.exact_length,
                range,
            })
        }
        TemplateToken::RepeatingProperty {
            name,
            separator,
            format,
        } => {
            let property = resolve(target, name, range)?;
            let Some(element) = property.ty.element_type() else {
                return Err(PartError::NonCollectionRepeating {
                    name: name.clone(),
                    type_name: property.ty.name.clone(),
                    range,
                });
            };
            let class = classify(element, format.as_deref())
                .map_err(|err| classify_error(err, property, element, format.as_ref(), range))?;

            KeyPart::RepeatingProperty(RepeatingPropertyKeyPart {
                property: property.clone(),
                separator: *separator,
                format: format.clone(),
                inner_parse_strategy: class.parse,
                inner_format_strategy: class.format,
                inner_type: element.clone(),
                length_required: class.length_required,
                range,
            })
        }
    };
    Ok(part)
}

fn resolve<'a>(
    target: &'a TargetType,
    name: &Name,
    range: TextRange,
) -> Result<&'a PropertyInfo, PartError> {
    target.property(name).ok_or_else(|| PartError::UnresolvedProperty {
        name: name.clone(),
        range,
    })
}

fn classify_error(
    err: ClassifyError,
    property: &PropertyInfo,
    ty: &TypeInfo,
    format: Option<&SmolStr>,
    range: TextRange,
) -> PartError {
    let name = property.name.clone();
    let type_name = ty.name.clone();
    match (err, format) {
        (ClassifyError::InvalidFormat, Some(format)) => PartError::InvalidFormat {
            name,
            type_name,
            format: format.clone(),
            range,
        },
        // Unsupported types, nested collections and formats on unsupported types
        _ => PartError::UnsupportedType { name, type_name, range },
    }
}
