//! Foundation types for the engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Name`] - Cheap-to-clone names for grammars, tokens and aliases
//! - [`TextRange`], [`TextSize`] - Byte offsets into tokenized input
//!
//! This module has NO dependencies on other crate modules.

pub use smol_str::SmolStr as Name;
pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;

/// Build a [`TextRange`] from byte offsets.
///
/// Offsets are stored as `u32`; inputs larger than 4 GiB must be chunked by
/// the caller before tokenization.
#[inline]
pub fn text_range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32))
}
