//! Target type fixtures.

use keyplate::model::{
    Capabilities, EnumMember, KeyConfig, KeyDeclaration, PropertyInfo, TargetType, TypeInfo,
};

/// Enum with values 0..3.
pub fn sequential_enum() -> TypeInfo {
    TypeInfo::enumeration(
        "Status",
        [
            EnumMember::new("Active", 0),
            EnumMember::new("Suspended", 1),
            EnumMember::new("Closed", 2),
        ],
    )
}

/// Enum with gaps between values.
pub fn sparse_enum() -> TypeInfo {
    TypeInfo::enumeration(
        "Priority",
        [
            EnumMember::new("Low", 10),
            EnumMember::new("High", 20),
        ],
    )
}

/// A partial record with one property of every supported kind.
pub fn sample_target() -> TargetType {
    TargetType::new("SampleKey")
        .with_property(PropertyInfo::new("GuidValue", TypeInfo::guid()))
        .with_property(PropertyInfo::new("Second", TypeInfo::guid()))
        .with_property(PropertyInfo::new("A", TypeInfo::guid()))
        .with_property(PropertyInfo::new("B", TypeInfo::string()))
        .with_property(PropertyInfo::new("C", TypeInfo::value("int", Capabilities::PRIMITIVE)))
        .with_property(PropertyInfo::new("Name", TypeInfo::string()))
        .with_property(PropertyInfo::new("Status", sequential_enum()))
        .with_property(PropertyInfo::new("Priority", sparse_enum()))
        .with_property(PropertyInfo::new(
            "Custom",
            TypeInfo::value("Custom", Capabilities::PARSABLE),
        ))
        .with_property(PropertyInfo::new(
            "Tags",
            TypeInfo::collection("List<string>", TypeInfo::string()),
        ))
        .with_property(PropertyInfo::new(
            "Ids",
            TypeInfo::collection("List<Guid>", TypeInfo::guid()),
        ))
}

/// A declaration on [`sample_target`].
pub fn declaration(template: &str) -> KeyDeclaration {
    KeyDeclaration::new(sample_target(), KeyConfig::new(template))
}

/// A declaration on [`sample_target`] with a primary separator.
pub fn composite_declaration(template: &str, separator: char) -> KeyDeclaration {
    KeyDeclaration::new(
        sample_target(),
        KeyConfig::new(template).with_primary_separator(separator),
    )
}
