//! Error types for the sd-core crate.
//!
//! This module provides the [`SettingsError`] type for settings-store
//! failures. Callers never propagate these to the editor; they select the
//! fallback default instead (see [`crate::ResolvedSettings`]).

/// Errors a settings store can report when asked for project settings.
///
/// # Examples
///
/// ```
/// use sd_core::SettingsError;
///
/// let error = SettingsError::unavailable("workspace not initialized");
/// assert!(error.to_string().contains("workspace not initialized"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading the settings store.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// The stored settings payload did not decode.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// The store cannot answer for this project right now.
    #[error("settings unavailable: {0}")]
    Unavailable(String),
}

impl SettingsError {
    /// Creates an [`SettingsError::Unavailable`] error.
    ///
    /// # Arguments
    ///
    /// * `reason` - Why the store cannot answer
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }
}
