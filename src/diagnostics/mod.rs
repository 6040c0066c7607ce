//! Diagnostics for key template validation
//!
//! This module provides:
//! - Stable, categorized diagnostic codes
//! - A diagnostic type with template range, subject name and hint
//! - A collector with one method per validation condition

mod codes;
mod diagnostic;

pub use codes::DiagnosticCode;
pub use diagnostic::{Access, Diagnostic, DiagnosticCollector, Diagnostics};
