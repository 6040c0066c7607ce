//! Foundation types for the keyplate toolchain.
//!
//! This module provides fundamental types used throughout the compiler:
//! - [`Name`] - Cheap-to-clone identifier text (property, type and member names)
//! - [`TextRange`], [`TextSize`] - Byte offsets into a key template
//!
//! This module has NO dependencies on other keyplate modules.

pub use smol_str::SmolStr as Name;
pub use text_size::{TextRange, TextSize};

/// Build a range covering `len` bytes starting at byte `start`.
pub fn range_at(start: usize, len: usize) -> TextRange {
    TextRange::at(text_size(start), text_size(len))
}

/// Convert a byte offset into a [`TextSize`].
///
/// Templates are attribute arguments, far below `u32::MAX` bytes; offsets
/// beyond that saturate rather than wrap.
pub fn text_size(offset: usize) -> TextSize {
    TextSize::new(u32::try_from(offset).unwrap_or(u32::MAX))
}
