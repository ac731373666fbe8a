//! Source location types for tracking positions in source files.
//!
//! This module provides the [`SourceLocation`] type for representing the
//! position of a controller class declaration within its source file.

use serde::{Deserialize, Serialize};

/// A position within a source file.
///
/// Represents the location of a controller's defining node, used for
/// editor navigation ("go to definition" on a catalog entry).
///
/// # Field Conventions
///
/// - `line` is 1-indexed (first line is line 1)
/// - `column` is 1-indexed (first character is column 1)
///
/// A definition whose declaration node could not be located carries the
/// default location, line 1 column 1.
///
/// # Examples
///
/// ```
/// use sd_core::SourceLocation;
///
/// let loc = SourceLocation::new(10, 5);
/// assert_eq!(loc.line, 10);
/// assert_eq!(loc.column, 5);
///
/// assert_eq!(SourceLocation::default(), SourceLocation::new(1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Line number (1-indexed).
    pub line: u32,

    /// Column number (1-indexed).
    pub column: u32,
}

impl SourceLocation {
    /// Creates a new source location.
    ///
    /// # Arguments
    ///
    /// * `line` - Line number (1-indexed)
    /// * `column` - Column number (1-indexed)
    #[inline]
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for SourceLocation {
    /// The fallback location for definitions with no known declaration node.
    fn default() -> Self {
        Self::new(1, 1)
    }
}
