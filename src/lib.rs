//! # keyplate-base
//!
//! Core library for compiling composite key templates into validated key
//! specifications.
//!
//! A template such as `"{TenantId}|Order_{OrderId:N}"` describes how a key's
//! text is composed from constants, delimiters and properties of a target
//! type. This crate tokenizes the template, resolves and classifies every
//! part against the target's metadata, splits composite keys into partition
//! and sort sections, and reports every structural problem. Emitting parse
//! and format code from the resulting [`KeySpec`] is left to a generator.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! compile     → Pipeline: compile, compile_all
//!   ↓
//! validate    → Validator, constructor selection
//!   ↓
//! diagnostics → Codes, Diagnostic, DiagnosticCollector
//!   ↓
//! model       → Target metadata, key parts, key specs, assembler
//!   ↓
//! parser      → Logos lexer, template tokenizer
//!   ↓
//! base        → Primitives (Name, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → model → diagnostics → validate → compile)
// ============================================================================

/// Foundation types: Name, TextRange
pub mod base;

/// Parser: Logos lexer and template tokenizer
pub mod parser;

/// Key model: metadata, parts, specs
pub mod model;

/// Diagnostic codes and collection
pub mod diagnostics;

/// Validation of key declarations
pub mod validate;

/// Compilation pipeline
pub mod compile;

/// Declaration loading and result export: JSON, YAML
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export the pipeline entry points
pub use compile::{compile, compile_all};
pub use diagnostics::{Diagnostic, DiagnosticCode, Diagnostics};
pub use model::{KeyConfig, KeyDeclaration, KeyPart, KeySpec, TargetType};

// Re-export foundation types
pub use base::{Name, TextRange, TextSize};
