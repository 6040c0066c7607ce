//! Integration tests for declaration validation.
//!
//! Each invalid declaration must report every condition it triggers, in
//! check order, and never produce a spec.

mod helpers;

use helpers::target_fixtures::{composite_declaration, declaration, sample_target};
use helpers::spec_assertions::{compile_codes, compile_ok};
use keyplate::model::{
    Capabilities, Constructor, KeyConfig, PropertyInfo, Setter, TargetType, TypeInfo, TypeShape,
    Visibility,
};
use keyplate::{DiagnosticCode, KeyDeclaration, compile};
use rstest::rstest;

use DiagnosticCode::*;

fn on_target(target: TargetType, template: &str) -> KeyDeclaration {
    KeyDeclaration::new(target, KeyConfig::new(template))
}

// ============================================================================
// SINGLE CONDITIONS
// ============================================================================

#[rstest]
#[case("{Name...,}", NonCollectionRepeatingProperty)]
#[case("{A}{B", TokenizationFailure)]
#[case("", TokenizationFailure)]
#[case("{Missing}", UnresolvedProperty)]
#[case("{Tags}", CollectionMissingRepeatingMarker)]
#[case("{Name:X}", InvalidFormatForType)]
#[case("{Status:G}", InvalidFormatForType)]
#[case("{Custom:F2}", InvalidFormatForType)]
#[case("{A:Q}", InvalidFormatForType)]
#[case("{Ids...,:Q}", InvalidFormatForType)]
#[case("{Tags...,}#{A}", MisplacedRepeatingPart)]
fn test_single_condition(#[case] template: &str, #[case] expected: DiagnosticCode) {
    assert_eq!(compile_codes(&declaration(template)), vec![expected]);
}

#[rstest]
#[case("{A}#{B}")]
#[case("{Tags...|}")]
#[case("{C:0|0}")]
#[case("{A}#{Ids...|:N}")]
fn test_unused_primary_separator(#[case] template: &str) {
    assert_eq!(
        compile_codes(&composite_declaration(template, '|')),
        vec![UnusedPrimarySeparator]
    );
}

#[test]
fn test_repeating_part_must_end_its_section() {
    assert_eq!(
        compile_codes(&composite_declaration("{Tags...,}#{A}|{B}", '|')),
        vec![MisplacedRepeatingPart]
    );
    assert_eq!(
        compile_codes(&composite_declaration("{B}|{Tags...,}#{A}", '|')),
        vec![MisplacedRepeatingPart]
    );
    compile_ok(&composite_declaration("{A}#{Tags...,}|{B}#{Ids...;}", '|'));
}

#[test]
fn test_unsupported_property_type() {
    let target = sample_target().with_property(PropertyInfo::new(
        "Blob",
        TypeInfo::value("Blob", Capabilities::default()),
    ));
    assert_eq!(compile_codes(&on_target(target, "{Blob}")), vec![UnsupportedPropertyType]);
}

#[test]
fn test_nested_collection_is_unsupported() {
    let nested = TypeInfo::collection(
        "List<List<string>>",
        TypeInfo::collection("List<string>", TypeInfo::string()),
    );
    let target = sample_target().with_property(PropertyInfo::new("Grid", nested));
    assert_eq!(compile_codes(&on_target(target, "{Grid...,}")), vec![UnsupportedPropertyType]);
}

// ============================================================================
// TARGET TYPE
// ============================================================================

#[rstest]
#[case(TypeShape::Interface)]
#[case(TypeShape::Enum)]
fn test_unsupported_target_shapes(#[case] shape: TypeShape) {
    let target = sample_target().with_shape(shape);
    assert_eq!(compile_codes(&on_target(target, "{A}")), vec![UnsupportedTargetShape]);
}

#[rstest]
#[case(TypeShape::Class)]
#[case(TypeShape::Struct)]
#[case(TypeShape::Record)]
fn test_supported_target_shapes(#[case] shape: TypeShape) {
    compile_ok(&on_target(sample_target().with_shape(shape), "{A}"));
}

#[test]
fn test_target_not_partial() {
    let target = sample_target().with_partial(false);
    let codes = compile_codes(&on_target(target, "{A}"));
    assert_eq!(codes, vec![TargetNotPartial]);
}

// ============================================================================
// CONSTRUCTORS AND ACCESSORS
// ============================================================================

fn read_only_target() -> TargetType {
    TargetType::new("OrderKey")
        .with_property(PropertyInfo::new("CustomerId", TypeInfo::guid()).read_only())
        .with_property(PropertyInfo::new("OrderId", TypeInfo::guid()).read_only())
}

#[test]
fn test_read_only_without_constructor_cannot_be_parsed() {
    let codes = compile_codes(&on_target(read_only_target(), "{CustomerId}#{OrderId}"));
    assert_eq!(codes, vec![InaccessibleProperty, InaccessibleProperty]);
}

#[test]
fn test_constructor_parameters_bind_read_only_properties() {
    let target = read_only_target().with_constructor(Constructor::new(["customerId", "orderId"]));
    compile_ok(&on_target(target, "{CustomerId}#{OrderId}"));
}

#[test]
fn test_partial_binding_leaves_unbound_property_inaccessible() {
    let target = read_only_target()
        .with_constructor(Constructor::new(["customerId"]))
        .with_constructor(Constructor::default());
    let diagnostics = compile(&on_target(target, "{CustomerId}#{OrderId}")).unwrap_err();

    assert_eq!(diagnostics.codes(), vec![InaccessibleProperty]);
    let diagnostic = diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.subject.as_deref(), Some("OrderId"));
}

#[test]
fn test_init_only_setter_is_enough() {
    let target =
        TargetType::new("Key").with_property(PropertyInfo::new("Id", TypeInfo::guid()).init_only());
    compile_ok(&on_target(target, "{Id}"));
}

#[test]
fn test_private_accessors_are_reachable() {
    let mut property = PropertyInfo::new("Id", TypeInfo::guid());
    property.getter = Some(Visibility::Private);
    property.setter = Some(Setter {
        visibility: Visibility::Private,
        init_only: false,
    });
    compile_ok(&on_target(TargetType::new("Key").with_property(property), "{Id}"));
}

#[test]
fn test_write_only_property_cannot_be_formatted() {
    let target = TargetType::new("Key")
        .with_property(PropertyInfo::new("Id", TypeInfo::guid()).write_only());
    assert_eq!(compile_codes(&on_target(target, "{Id}")), vec![InaccessibleProperty]);
}

#[test]
fn test_ambiguous_constructors() {
    let target = read_only_target()
        .with_constructor(Constructor::new(["CustomerId"]))
        .with_constructor(Constructor::new(["OrderId"]));
    // Write access is not checked without a usable constructor.
    assert_eq!(
        compile_codes(&on_target(target, "{CustomerId}#{OrderId}")),
        vec![AmbiguousConstructor]
    );
}

#[test]
fn test_no_matching_constructor() {
    let target = sample_target().with_constructor(Constructor::new(["A", "Unrelated"]));
    assert_eq!(compile_codes(&on_target(target, "{A}")), vec![AmbiguousConstructor]);
}

#[test]
fn test_repeated_property_reported_once() {
    let target = TargetType::new("Key")
        .with_property(PropertyInfo::new("Id", TypeInfo::guid()).write_only());
    assert_eq!(compile_codes(&on_target(target, "{Id}#{Id:N}")), vec![InaccessibleProperty]);
}

// ============================================================================
// ACCUMULATION
// ============================================================================

#[test]
fn test_every_condition_is_reported() {
    let target = sample_target().with_shape(TypeShape::Interface).with_partial(false);
    let codes = compile_codes(&on_target(target, "{Missing}#{Name...,}#{Tags}"));

    assert_eq!(
        codes,
        vec![
            UnsupportedTargetShape,
            TargetNotPartial,
            MisplacedRepeatingPart,
            UnresolvedProperty,
            NonCollectionRepeatingProperty,
            CollectionMissingRepeatingMarker,
        ]
    );
}

#[test]
fn test_tokenization_failure_still_reports_target_errors() {
    let target = sample_target().with_partial(false);
    assert_eq!(
        compile_codes(&on_target(target, "{A")),
        vec![TargetNotPartial, TokenizationFailure]
    );
}

#[test]
fn test_diagnostics_carry_ranges_and_subjects() {
    let diagnostics = compile(&declaration("{A}#{Missing}")).unwrap_err();
    let diagnostic = diagnostics.iter().next().unwrap();

    assert_eq!(diagnostic.code, UnresolvedProperty);
    assert_eq!(diagnostic.subject.as_deref(), Some("Missing"));
    let range = diagnostic.range.unwrap();
    assert_eq!((u32::from(range.start()), u32::from(range.end())), (4, 13));
    assert!(diagnostics.to_string().contains("CK0301"));
}
