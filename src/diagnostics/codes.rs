//! Diagnostic code definitions
//!
//! Codes follow a naming convention: CK{category}{number}
//! - CK01xx: Target type errors
//! - CK02xx: Template errors
//! - CK03xx: Property errors
//! - CK04xx: Key structure errors

use std::fmt;

/// Stable codes for key template diagnostics
///
/// Each code identifies exactly one validation condition, so drivers can
/// filter, document and test against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticCode {
    // =========================================================================
    // CK01xx: Target type errors
    // =========================================================================
    /// Target is not a class, record or struct
    UnsupportedTargetShape,
    /// Target is not declared partial
    TargetNotPartial,
    /// No constructor, or more than one, matches the template properties
    AmbiguousConstructor,

    // =========================================================================
    // CK02xx: Template errors
    // =========================================================================
    /// Template is empty or malformed
    TokenizationFailure,
    /// Primary separator configured but absent from the template
    UnusedPrimarySeparator,

    // =========================================================================
    // CK03xx: Property errors
    // =========================================================================
    /// Template names a property the target does not declare
    UnresolvedProperty,
    /// Property lacks the getter or setter its role needs
    InaccessibleProperty,
    /// Format string not valid for the property type
    InvalidFormatForType,
    /// Repeating marker on a non-collection property
    NonCollectionRepeatingProperty,
    /// Collection property used without a repeating marker
    CollectionMissingRepeatingMarker,
    /// Property type cannot be parsed from a key
    UnsupportedPropertyType,

    // =========================================================================
    // CK04xx: Key structure errors
    // =========================================================================
    /// Repeating part is not the last part of its section
    MisplacedRepeatingPart,
}

impl DiagnosticCode {
    /// Every code, in code order
    pub const ALL: [Self; 12] = [
        Self::UnsupportedTargetShape,
        Self::TargetNotPartial,
        Self::AmbiguousConstructor,
        Self::TokenizationFailure,
        Self::UnusedPrimarySeparator,
        Self::UnresolvedProperty,
        Self::InaccessibleProperty,
        Self::InvalidFormatForType,
        Self::NonCollectionRepeatingProperty,
        Self::CollectionMissingRepeatingMarker,
        Self::UnsupportedPropertyType,
        Self::MisplacedRepeatingPart,
    ];

    /// Look up a code by its string form (e.g., "CK0201")
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }

    /// Get the string representation of the code (e.g., "CK0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Target
            Self::UnsupportedTargetShape => "CK0101",
            Self::TargetNotPartial => "CK0102",
            Self::AmbiguousConstructor => "CK0103",
            // Template
            Self::TokenizationFailure => "CK0201",
            Self::UnusedPrimarySeparator => "CK0202",
            // Property
            Self::UnresolvedProperty => "CK0301",
            Self::InaccessibleProperty => "CK0302",
            Self::InvalidFormatForType => "CK0303",
            Self::NonCollectionRepeatingProperty => "CK0304",
            Self::CollectionMissingRepeatingMarker => "CK0305",
            Self::UnsupportedPropertyType => "CK0306",
            // Structure
            Self::MisplacedRepeatingPart => "CK0401",
        }
    }

    /// Get a short description of the code category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::UnsupportedTargetShape | Self::TargetNotPartial | Self::AmbiguousConstructor => {
                "target type error"
            }
            Self::TokenizationFailure | Self::UnusedPrimarySeparator => "template error",
            Self::UnresolvedProperty
            | Self::InaccessibleProperty
            | Self::InvalidFormatForType
            | Self::NonCollectionRepeatingProperty
            | Self::CollectionMissingRepeatingMarker
            | Self::UnsupportedPropertyType => "property error",
            Self::MisplacedRepeatingPart => "key structure error",
        }
    }

    /// Get the default message for this code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::UnsupportedTargetShape => "unsupported target type",
            Self::TargetNotPartial => "target type is not partial",
            Self::AmbiguousConstructor => "no unambiguous constructor",
            Self::TokenizationFailure => "invalid key template",
            Self::UnusedPrimarySeparator => "primary separator not used",
            Self::UnresolvedProperty => "unknown property",
            Self::InaccessibleProperty => "inaccessible property",
            Self::InvalidFormatForType => "invalid format",
            Self::NonCollectionRepeatingProperty => "repeating property is not a collection",
            Self::CollectionMissingRepeatingMarker => "collection property must repeat",
            Self::UnsupportedPropertyType => "unsupported property type",
            Self::MisplacedRepeatingPart => "repeating property must be last",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Interchange uses the stable code string, not the variant name.
#[cfg(feature = "interchange")]
impl serde::Serialize for DiagnosticCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "interchange")]
impl<'de> serde::Deserialize<'de> for DiagnosticCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::parse(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown diagnostic code '{}'", code)))
    }
}
