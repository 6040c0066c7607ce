//! Assertions over compiled key specs and diagnostics.

use keyplate::model::{CompositePrimaryKeySpec, KeyDeclaration, KeyPart, KeySpec};
use keyplate::{DiagnosticCode, compile};

/// Compile and expect success.
pub fn compile_ok(declaration: &KeyDeclaration) -> KeySpec {
    match compile(declaration) {
        Ok(spec) => spec,
        Err(diagnostics) => panic!(
            "Expected '{}' to compile, got:\n{}",
            declaration.config.template,
            diagnostics
                .iter()
                .map(|d| format!("  {}", d.format()))
                .collect::<Vec<_>>()
                .join("\n")
        ),
    }
}

/// Compile and expect failure; returns the codes in report order.
pub fn compile_codes(declaration: &KeyDeclaration) -> Vec<DiagnosticCode> {
    match compile(declaration) {
        Ok(spec) => panic!(
            "Expected '{}' to be rejected, got spec with {} parts",
            declaration.config.template,
            spec.parts().len()
        ),
        Err(diagnostics) => diagnostics.codes(),
    }
}

/// Unwrap a composite spec.
pub fn expect_composite(spec: KeySpec) -> CompositePrimaryKeySpec {
    match spec {
        KeySpec::Composite(spec) => spec,
        KeySpec::Primary(spec) => panic!(
            "expected composite spec, got primary with {} parts",
            spec.parts.len()
        ),
    }
}

/// Short description of a part for order assertions.
pub fn describe(part: &KeyPart) -> String {
    match part {
        KeyPart::Constant(p) => format!("const:{}", p.value),
        KeyPart::Delimiter(p) => format!("delim:{}", p.value),
        KeyPart::PrimaryDelimiter(p) => format!("primary:{}", p.value),
        KeyPart::Property(p) => format!("prop:{}", p.property.name),
        KeyPart::RepeatingProperty(p) => format!("repeat:{}", p.property.name),
    }
}

pub fn describe_all(parts: &[KeyPart]) -> Vec<String> {
    parts.iter().map(describe).collect()
}
