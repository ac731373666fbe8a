//! Error types for the sd-catalog crate.
//!
//! This module provides [`AnalyzerError`] for failures reported by the
//! controller analysis collaborator and [`CatalogError`] for failures of a
//! catalog request as a whole.
//!
//! # Error Flow
//!
//! - **Settings failures** ([`sd_core::SettingsError`]): never surface here.
//!   The service logs them and falls back to default settings.
//! - **Analyzer failures** ([`AnalyzerError`]): abort the request, but only
//!   after the rewritten entry points have been restored.
//! - **Configuration failures** ([`CatalogError::Config`]): reported before
//!   any file is touched.

/// Errors reported by a [`ControllerAnalyzer`](crate::ControllerAnalyzer)
/// while refreshing its view of the project.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// The analysis run itself failed.
    ///
    /// Carries a human-readable description from the analyzer, for example a
    /// parse failure or an unresolvable import graph.
    #[error("refresh failed: {0}")]
    Refresh(String),

    /// The analyzer could not read project files.
    #[error("analyzer I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalyzerError {
    /// Creates a new [`AnalyzerError::Refresh`] error.
    #[inline]
    pub fn refresh(message: impl Into<String>) -> Self {
        Self::Refresh(message.into())
    }
}

/// Errors that can abort a catalog request.
///
/// # Examples
///
/// ```
/// use sd_catalog::CatalogError;
///
/// fn describe(err: &CatalogError) -> String {
///     match err {
///         CatalogError::Config(msg) => format!("bad request: {msg}"),
///         CatalogError::Analyzer(e) => format!("analysis broke: {e}"),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The request was invalid before any work started.
    ///
    /// Typically a project root that does not exist or is not a directory.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The controller analyzer failed to refresh.
    ///
    /// Entry points have already been restored by the time this is returned.
    #[error("controller analysis failed: {0}")]
    Analyzer(#[from] AnalyzerError),
}

impl CatalogError {
    /// Creates a new [`CatalogError::Config`] error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_analyzer_error_refresh_display() {
        let err = AnalyzerError::refresh("unresolved import in index.js");
        assert_eq!(
            err.to_string(),
            "refresh failed: unresolved import in index.js"
        );
    }

    #[test]
    fn test_analyzer_error_from_io() {
        let err: AnalyzerError =
            io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.to_string().contains("I/O failure"));
    }

    #[test]
    fn test_catalog_error_config_display() {
        let err = CatalogError::config("project root missing");
        assert_eq!(err.to_string(), "invalid configuration: project root missing");
    }

    #[test]
    fn test_catalog_error_wraps_analyzer() {
        let err: CatalogError = AnalyzerError::refresh("parse failure").into();
        assert_eq!(
            err.to_string(),
            "controller analysis failed: refresh failed: parse failure"
        );
    }
}
