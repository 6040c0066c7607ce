//! Compilation pipeline
//!
//! ```text
//! KeyDeclaration
//!     ↓
//! tokenize → build_key_parts → validate → assemble
//!     ↓
//! KeySpec | Diagnostics
//! ```
//!
//! Every stage is a pure function of its inputs, so independent
//! declarations can be compiled on any number of threads.

use rayon::prelude::*;
use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::model::{KeyDeclaration, KeySpec, assemble, build_key_parts};
use crate::parser::tokenize;
use crate::validate::Validator;

/// Compile one declaration into a finalized key spec.
///
/// Returns every applicable diagnostic when the declaration is invalid.
pub fn compile(declaration: &KeyDeclaration) -> Result<KeySpec, Diagnostics> {
    let config = &declaration.config;
    let mut validator = Validator::new(declaration);
    validator.check_target();

    let parts = match tokenize(&config.template, config.primary_separator) {
        Ok(tokens) => {
            validator.check_tokens(&tokens);
            let built = build_key_parts(&tokens, &declaration.target);
            validator.check_parts(&built);
            Ok(built.parts)
        }
        Err(err) => {
            validator.tokenization_failed(&err);
            Err(err)
        }
    };

    let result = match (validator.finish(), parts) {
        (Err(diagnostics), _) => Err(diagnostics),
        (Ok(()), Ok(parts)) => assemble(parts, config).map_err(Diagnostics::from),
        (Ok(()), Err(err)) => Err(Diagnostics::from(&err)),
    };

    match &result {
        Ok(spec) => debug!(
            ty = %declaration.target.name,
            parts = spec.parts().len(),
            composite = spec.is_composite(),
            "compiled key template"
        ),
        Err(diagnostics) => debug!(
            ty = %declaration.target.name,
            diagnostics = diagnostics.len(),
            "key template rejected"
        ),
    }
    result
}

/// Compile many declarations in parallel.
///
/// Results are in input order; one declaration's failure does not affect
/// the others.
pub fn compile_all(declarations: &[KeyDeclaration]) -> Vec<Result<KeySpec, Diagnostics>> {
    debug!(count = declarations.len(), "compiling key declarations");
    declarations.par_iter().map(compile).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticCode;
    use crate::model::{KeyConfig, PropertyInfo, TargetType, TypeInfo};

    fn declaration(template: &str, separator: Option<char>) -> KeyDeclaration {
        let mut config = KeyConfig::new(template);
        config.primary_separator = separator;
        KeyDeclaration::new(
            TargetType::new("Key")
                .with_property(PropertyInfo::new("A", TypeInfo::guid()))
                .with_property(PropertyInfo::new("B", TypeInfo::guid())),
            config,
        )
    }

    #[test]
    fn test_compile_primary() {
        let spec = compile(&declaration("{A}#{B}", None)).unwrap();
        assert!(!spec.is_composite());
        assert_eq!(spec.exact_length(), Some(73));
    }

    #[test]
    fn test_compile_composite() {
        let spec = compile(&declaration("{A}|{B}", Some('|'))).unwrap();
        let KeySpec::Composite(spec) = spec else {
            panic!("expected composite spec");
        };
        assert_eq!(spec.partition_exact_length(), Some(36));
        assert_eq!(spec.sort_exact_length(), Some(36));
    }

    #[test]
    fn test_compile_rejects() {
        let diagnostics = compile(&declaration("{A}#{B}", Some('|'))).unwrap_err();
        assert_eq!(diagnostics.codes(), vec![DiagnosticCode::UnusedPrimarySeparator]);
    }

    #[test]
    fn test_compile_all_keeps_order() {
        let declarations = vec![
            declaration("{A}", None),
            declaration("{A", None),
            declaration("{B}|{A}", Some('|')),
        ];
        let results = compile_all(&declarations);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].as_ref().is_ok_and(KeySpec::is_composite));
    }
}
