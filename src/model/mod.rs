//! Key model: target metadata, key parts and key specifications.
//!
//! ```text
//! Tokens + TargetType
//!     ↓
//! build_key_parts → KeyParts (parts + PartErrors)
//!     ↓
//! assemble → KeySpec (Primary | Composite)
//! ```

mod config;
mod enum_shape;
mod key_part;
mod key_spec;
mod strategy;
mod target;

pub use config::{KeyConfig, KeyDeclaration};
pub use enum_shape::{EnumDispatch, EnumMember, EnumShape, classify_members, enum_dispatch};
pub use key_part::{
    ConstantKeyPart, DelimiterKeyPart, KeyPart, KeyParts, PartError, PropertyKeyPart,
    RepeatingPropertyKeyPart, build_key_part, build_key_parts,
};
pub use key_spec::{AssembleError, CompositePrimaryKeySpec, KeySpec, PrimaryKeySpec, assemble};
pub use strategy::{
    Classification, ClassifyError, FormatStrategy, GuidFormat, ParseStrategy, classify,
};
pub use target::{
    Capabilities, Constructor, PropertyInfo, Setter, TargetType, TypeInfo, TypeKind, TypeShape,
    Visibility,
};
