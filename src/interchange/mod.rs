//! Declaration interchange
//!
//! Loads batches of key declarations (target metadata plus key
//! configuration) written by a host type resolver, and writes compile
//! results for an external code generator.
//!
//! ## Supported formats
//!
//! - **JSON** (`.json`)
//! - **YAML** (`.yaml`, `.yml`)

mod error;

use std::path::Path;

use serde::Serialize;
use tracing::debug;

pub use error::InterchangeError;

use crate::base::Name;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::model::{KeyDeclaration, KeySpec};

/// Parse a JSON array of declarations.
pub fn load_json(text: &str) -> Result<Vec<KeyDeclaration>, InterchangeError> {
    serde_json::from_str(text).map_err(|e| InterchangeError::json(e.to_string()))
}

/// Parse a YAML sequence of declarations.
pub fn load_yaml(text: &str) -> Result<Vec<KeyDeclaration>, InterchangeError> {
    serde_yaml::from_str(text).map_err(|e| InterchangeError::yaml(e.to_string()))
}

/// Load declarations from a file, choosing the format by extension.
pub fn load_path(path: &Path) -> Result<Vec<KeyDeclaration>, InterchangeError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let text = std::fs::read_to_string(path)?;
    let declarations = match extension.as_str() {
        "json" => load_json(&text)?,
        "yaml" | "yml" => load_yaml(&text)?,
        other => return Err(InterchangeError::Unsupported(format!("file extension '{}'", other))),
    };

    debug!(path = %path.display(), count = declarations.len(), "loaded key declarations");
    Ok(declarations)
}

/// Compile result of one declaration, as handed to the code generator.
#[derive(Debug, Serialize)]
pub struct CompileReport<'a> {
    pub target: &'a Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<&'a KeySpec>,
    #[serde(skip_serializing_if = "no_diagnostics")]
    pub diagnostics: &'a [Diagnostic],
}

impl<'a> CompileReport<'a> {
    pub fn new(declaration: &'a KeyDeclaration, result: &'a Result<KeySpec, Diagnostics>) -> Self {
        let (spec, diagnostics) = match result {
            Ok(spec) => (Some(spec), &[][..]),
            Err(diagnostics) => (None, diagnostics.as_slice()),
        };
        Self {
            target: &declaration.target.name,
            spec,
            diagnostics,
        }
    }
}

fn no_diagnostics(diagnostics: &&[Diagnostic]) -> bool {
    diagnostics.is_empty()
}

/// Serialize paired declarations and results as a pretty JSON array.
pub fn to_json(
    declarations: &[KeyDeclaration],
    results: &[Result<KeySpec, Diagnostics>],
) -> Result<String, InterchangeError> {
    let reports: Vec<CompileReport<'_>> = declarations
        .iter()
        .zip(results)
        .map(|(declaration, result)| CompileReport::new(declaration, result))
        .collect();
    serde_json::to_string_pretty(&reports).map_err(|e| InterchangeError::json(e.to_string()))
}

/// Serde adapter storing the property table as a list.
pub(crate) mod property_list {
    use indexmap::IndexMap;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::base::Name;
    use crate::model::PropertyInfo;

    pub fn serialize<S: Serializer>(
        properties: &IndexMap<Name, PropertyInfo>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(properties.values())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<IndexMap<Name, PropertyInfo>, D::Error> {
        let list = Vec::<PropertyInfo>::deserialize(deserializer)?;
        Ok(list.into_iter().map(|p| (p.name.clone(), p)).collect())
    }
}
