//! Target type metadata
//!
//! Plain-data description of the type a key template is declared on, as
//! handed over by the host type resolver.

use indexmap::IndexMap;

use super::enum_shape::{EnumMember, EnumShape};
use crate::base::Name;

/// Declaration kind of the target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeShape {
    Class,
    Record,
    Struct,
    Interface,
    Enum,
}

impl TypeShape {
    /// Whether generated members can be added to this kind of declaration
    pub fn is_augmentable(self) -> bool {
        matches!(self, Self::Class | Self::Record | Self::Struct)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Record => "record",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Enum => "enum",
        }
    }
}

/// Accessor visibility.
///
/// Generated members live in the same partial type, so any declared
/// accessor is callable from them. Visibility is carried through for the
/// generator and never rejects a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

/// A property's write accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Setter {
    pub visibility: Visibility,
    /// Only assignable during construction
    #[cfg_attr(feature = "interchange", serde(default))]
    pub init_only: bool,
}

/// Parse/format interfaces implemented by a value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default))]
pub struct Capabilities {
    pub span_parsable: bool,
    pub parsable: bool,
    pub span_formattable: bool,
    pub formattable: bool,
}

impl Capabilities {
    /// Numbers, dates and other fully featured primitives
    pub const PRIMITIVE: Self = Self {
        span_parsable: true,
        parsable: true,
        span_formattable: true,
        formattable: true,
    };

    /// Parsable from a string, formatted through plain to-string
    pub const PARSABLE: Self = Self {
        span_parsable: false,
        parsable: true,
        span_formattable: false,
        formattable: false,
    };
}

/// Declared type classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    /// 128-bit identifier with a canonical fixed-width text form
    Guid,
    String,
    Enum(EnumShape),
    /// Collection with the given element type
    Collection(Box<TypeInfo>),
    /// Any other value type
    Value(Capabilities),
}

/// A declared type: display name plus classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeInfo {
    pub name: Name,
    pub kind: TypeKind,
}

impl TypeInfo {
    pub fn new(name: impl Into<Name>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn guid() -> Self {
        Self::new("Guid", TypeKind::Guid)
    }

    pub fn string() -> Self {
        Self::new("string", TypeKind::String)
    }

    pub fn value(name: impl Into<Name>, capabilities: Capabilities) -> Self {
        Self::new(name, TypeKind::Value(capabilities))
    }

    pub fn enumeration(
        name: impl Into<Name>,
        members: impl IntoIterator<Item = EnumMember>,
    ) -> Self {
        Self::new(name, TypeKind::Enum(EnumShape::new(members)))
    }

    pub fn collection(name: impl Into<Name>, element: TypeInfo) -> Self {
        Self::new(name, TypeKind::Collection(Box::new(element)))
    }

    /// Element type when this is a collection
    pub fn element_type(&self) -> Option<&TypeInfo> {
        match &self.kind {
            TypeKind::Collection(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self.kind, TypeKind::Collection(_))
    }
}

/// A property declared on the target type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyInfo {
    pub name: Name,
    pub ty: TypeInfo,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub getter: Option<Visibility>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub setter: Option<Setter>,
}

impl PropertyInfo {
    /// A property with public get and set accessors
    pub fn new(name: impl Into<Name>, ty: TypeInfo) -> Self {
        Self {
            name: name.into(),
            ty,
            getter: Some(Visibility::Public),
            setter: Some(Setter::default()),
        }
    }

    /// A get-only property
    pub fn read_only(mut self) -> Self {
        self.setter = None;
        self
    }

    /// A property with an init-only setter
    pub fn init_only(mut self) -> Self {
        self.setter = Some(Setter {
            visibility: Visibility::Public,
            init_only: true,
        });
        self
    }

    /// A set-only property
    pub fn write_only(mut self) -> Self {
        self.getter = None;
        self
    }

    pub fn is_readable(&self) -> bool {
        self.getter.is_some()
    }

    pub fn is_writable(&self) -> bool {
        self.setter.is_some()
    }
}

/// A declared constructor, identified by its parameter names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Constructor {
    pub parameters: Vec<Name>,
}

impl Constructor {
    pub fn new<N: Into<Name>>(parameters: impl IntoIterator<Item = N>) -> Self {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a parameter binds the property (ASCII case-insensitive)
    pub fn binds(&self, property: &str) -> bool {
        self.parameters.iter().any(|p| p.eq_ignore_ascii_case(property))
    }
}

/// The type a key template is declared on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetType {
    pub name: Name,
    pub shape: TypeShape,
    pub is_partial: bool,
    #[cfg_attr(feature = "interchange", serde(with = "crate::interchange::property_list"))]
    pub properties: IndexMap<Name, PropertyInfo>,
    /// Empty means an implicit parameterless constructor
    #[cfg_attr(feature = "interchange", serde(default))]
    pub constructors: Vec<Constructor>,
}

impl TargetType {
    /// A partial record with no properties
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            shape: TypeShape::Record,
            is_partial: true,
            properties: IndexMap::new(),
            constructors: Vec::new(),
        }
    }

    pub fn with_shape(mut self, shape: TypeShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_partial(mut self, is_partial: bool) -> Self {
        self.is_partial = is_partial;
        self
    }

    pub fn with_property(mut self, property: PropertyInfo) -> Self {
        self.properties.insert(property.name.clone(), property);
        self
    }

    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Look up a property by exact name
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_augmentable() {
        assert!(TypeShape::Record.is_augmentable());
        assert!(TypeShape::Class.is_augmentable());
        assert!(TypeShape::Struct.is_augmentable());
        assert!(!TypeShape::Interface.is_augmentable());
        assert!(!TypeShape::Enum.is_augmentable());
    }

    #[test]
    fn test_property_lookup_is_exact() {
        let target =
            TargetType::new("Key").with_property(PropertyInfo::new("Id", TypeInfo::guid()));
        assert!(target.property("Id").is_some());
        assert!(target.property("id").is_none());
    }

    #[test]
    fn test_constructor_binds_case_insensitively() {
        let ctor = Constructor::new(["id", "name"]);
        assert!(ctor.binds("Id"));
        assert!(ctor.binds("NAME"));
        assert!(!ctor.binds("Other"));
    }

    #[test]
    fn test_accessors() {
        let prop = PropertyInfo::new("Id", TypeInfo::guid()).read_only();
        assert!(prop.is_readable());
        assert!(!prop.is_writable());

        let prop = PropertyInfo::new("Id", TypeInfo::guid()).init_only();
        assert!(prop.is_writable());
        assert_eq!(prop.setter.map(|s| s.init_only), Some(true));
    }

    #[test]
    fn test_collection_element() {
        let ty = TypeInfo::collection("List<string>", TypeInfo::string());
        assert!(ty.is_collection());
        assert_eq!(ty.element_type(), Some(&TypeInfo::string()));
        assert_eq!(TypeInfo::guid().element_type(), None);
    }
}
