//! Parse/format strategy classification
//!
//! Decides, per declared type and optional format string, how generated
//! code reads a value out of a key span and writes it back, and how much
//! buffer space the value needs.

use tracing::trace;

use super::enum_shape::EnumDispatch;
use super::target::{Capabilities, TypeInfo, TypeKind};

/// Length of the `X` GUID form: `{0x00000000,0x0000,0x0000,{0x00,...,0x00}}`.
const GUID_HEX_LENGTH: usize = 68;

/// How a value is read from its span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseStrategy {
    /// Fixed-width GUID parse with the given textual form
    Guid(GuidFormat),
    /// The span itself is the value
    String,
    Enum(EnumDispatch),
    /// Parse directly from a character span
    SpanParsable,
    /// Parse from an allocated string
    Parsable,
}

/// How a value is written into the key buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatStrategy {
    Guid(GuidFormat),
    String,
    Enum(EnumDispatch),
    /// Format directly into the destination span, format string aware
    SpanFormattable,
    /// Format to an intermediate string, format string aware
    Formattable,
    /// Plain to-string
    Display,
}

/// Canonical GUID text forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum GuidFormat {
    /// `00000000-0000-0000-0000-000000000000`
    #[default]
    D,
    /// `00000000000000000000000000000000`
    N,
    /// `{00000000-0000-0000-0000-000000000000}`
    B,
    /// `(00000000-0000-0000-0000-000000000000)`
    P,
    /// `{0x00000000,0x0000,0x0000,{0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00}}`
    X,
}

impl GuidFormat {
    /// Parse a format specifier; `None` selects the default form.
    pub fn from_specifier(format: Option<&str>) -> Option<Self> {
        match format {
            None | Some("D" | "d") => Some(Self::D),
            Some("N" | "n") => Some(Self::N),
            Some("B" | "b") => Some(Self::B),
            Some("P" | "p") => Some(Self::P),
            Some("X" | "x") => Some(Self::X),
            Some(_) => None,
        }
    }

    /// Exact text length of this form
    pub fn length(self) -> usize {
        match self {
            Self::D => uuid::fmt::Hyphenated::LENGTH,
            Self::N => uuid::fmt::Simple::LENGTH,
            Self::B | Self::P => uuid::fmt::Braced::LENGTH,
            Self::X => GUID_HEX_LENGTH,
        }
    }
}

/// Strategies and length characteristics for one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub parse: ParseStrategy,
    pub format: FormatStrategy,
    /// Exact length when `exact_length`, otherwise a minimum sizing hint
    pub length_required: usize,
    pub exact_length: bool,
}

impl Classification {
    fn variable(parse: ParseStrategy, format: FormatStrategy, min_length: usize) -> Self {
        Self {
            parse,
            format,
            length_required: min_length,
            exact_length: false,
        }
    }
}

/// Why a type could not be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    /// The format string is not valid for the type
    InvalidFormat,
    /// The type can't be parsed from text
    Unsupported,
    /// Collections must use the repeating marker
    Collection,
}

/// Classify a scalar value of type `ty` with an optional format string.
pub fn classify(ty: &TypeInfo, format: Option<&str>) -> Result<Classification, ClassifyError> {
    let classification = match &ty.kind {
        TypeKind::Guid => {
            let guid = GuidFormat::from_specifier(format).ok_or(ClassifyError::InvalidFormat)?;
            Classification {
                parse: ParseStrategy::Guid(guid),
                format: FormatStrategy::Guid(guid),
                length_required: guid.length(),
                exact_length: true,
            }
        }
        TypeKind::String => {
            reject_format(format)?;
            Classification::variable(ParseStrategy::String, FormatStrategy::String, 1)
        }
        TypeKind::Enum(shape) => {
            reject_format(format)?;
            let dispatch = shape.dispatch();
            let min = shape.shortest_name_len().unwrap_or(1).max(1);
            Classification::variable(
                ParseStrategy::Enum(dispatch),
                FormatStrategy::Enum(dispatch),
                min,
            )
        }
        TypeKind::Value(capabilities) => classify_value(*capabilities, format)?,
        TypeKind::Collection(_) => return Err(ClassifyError::Collection),
    };

    trace!(ty = %ty.name, ?format, ?classification, "classified type");
    Ok(classification)
}

fn classify_value(
    capabilities: Capabilities,
    format: Option<&str>,
) -> Result<Classification, ClassifyError> {
    let parse = if capabilities.span_parsable {
        ParseStrategy::SpanParsable
    } else if capabilities.parsable {
        ParseStrategy::Parsable
    } else {
        return Err(ClassifyError::Unsupported);
    };

    let format_strategy = if capabilities.span_formattable {
        FormatStrategy::SpanFormattable
    } else if capabilities.formattable {
        FormatStrategy::Formattable
    } else {
        reject_format(format)?;
        FormatStrategy::Display
    };

    Ok(Classification::variable(parse, format_strategy, 1))
}

fn reject_format(format: Option<&str>) -> Result<(), ClassifyError> {
    match format {
        Some(_) => Err(ClassifyError::InvalidFormat),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::enum_shape::EnumMember;

    #[test]
    fn test_guid_lengths() {
        let cases = [
            (None, 36),
            (Some("D"), 36),
            (Some("n"), 32),
            (Some("B"), 38),
            (Some("p"), 38),
            (Some("X"), 68),
        ];
        for (format, length) in cases {
            let c = classify(&TypeInfo::guid(), format).unwrap();
            assert!(c.exact_length);
            assert_eq!(c.length_required, length, "format {:?}", format);
        }
    }

    #[test]
    fn test_guid_rejects_unknown_format() {
        assert_eq!(
            classify(&TypeInfo::guid(), Some("Q")),
            Err(ClassifyError::InvalidFormat)
        );
    }

    #[test]
    fn test_string_is_variable_and_formatless() {
        let c = classify(&TypeInfo::string(), None).unwrap();
        assert_eq!(c.parse, ParseStrategy::String);
        assert!(!c.exact_length);
        assert_eq!(c.length_required, 1);
        assert_eq!(
            classify(&TypeInfo::string(), Some("x")),
            Err(ClassifyError::InvalidFormat)
        );
    }

    #[test]
    fn test_enum_min_length_and_dispatch() {
        let ty = TypeInfo::enumeration(
            "Color",
            [EnumMember::new("Red", 0), EnumMember::new("Green", 1)],
        );
        let c = classify(&ty, None).unwrap();
        assert_eq!(c.parse, ParseStrategy::Enum(EnumDispatch::Sequential));
        assert_eq!(c.length_required, 3);
        assert!(!c.exact_length);
    }

    #[test]
    fn test_value_strategies() {
        let c = classify(&TypeInfo::value("int", Capabilities::PRIMITIVE), Some("D4")).unwrap();
        assert_eq!(c.parse, ParseStrategy::SpanParsable);
        assert_eq!(c.format, FormatStrategy::SpanFormattable);

        let c = classify(&TypeInfo::value("Custom", Capabilities::PARSABLE), None).unwrap();
        assert_eq!(c.parse, ParseStrategy::Parsable);
        assert_eq!(c.format, FormatStrategy::Display);

        assert_eq!(
            classify(&TypeInfo::value("Custom", Capabilities::PARSABLE), Some("x")),
            Err(ClassifyError::InvalidFormat)
        );
        assert_eq!(
            classify(&TypeInfo::value("Opaque", Capabilities::default()), None),
            Err(ClassifyError::Unsupported)
        );
    }

    #[test]
    fn test_collection_needs_marker() {
        let ty = TypeInfo::collection("List<Guid>", TypeInfo::guid());
        assert_eq!(classify(&ty, None), Err(ClassifyError::Collection));
    }
}
