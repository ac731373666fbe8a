//! Project settings for controller catalog requests.
//!
//! This module provides the editor-facing settings surface:
//!
//! - [`ProjectSettings`] - per-project options as stored by the editor
//! - [`PathPresentation`] - how suggested import paths are rendered
//! - [`ResolvedSettings`] - settings plus their provenance, so callers can
//!   tell a loaded configuration apart from the fallback default
//!
//! Settings lookups are allowed to fail (missing project, unreadable store,
//! malformed payload); every failure resolves to [`ProjectSettings::default`]
//! with [`SettingsSource::Fallback`] rather than surfacing an error.

use serde::{Deserialize, Serialize};

/// Per-project settings as stored by the editor.
///
/// Unknown projects and failed lookups fall back to the default value.
///
/// # Examples
///
/// ```
/// use sd_core::{PathPresentation, ProjectSettings};
///
/// let settings: ProjectSettings = serde_json::from_str(r#"{"useAbsolutePaths": true}"#).unwrap();
/// assert_eq!(settings.path_presentation(), PathPresentation::Absolute);
///
/// // Missing fields take defaults
/// let settings: ProjectSettings = serde_json::from_str("{}").unwrap();
/// assert_eq!(settings.path_presentation(), PathPresentation::Relative);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectSettings {
    /// Render suggested import paths as absolute filesystem paths instead of
    /// paths relative to the controllers root.
    pub use_absolute_paths: bool,
}

impl ProjectSettings {
    /// Returns the path presentation mode these settings select.
    #[inline]
    #[must_use]
    pub const fn path_presentation(self) -> PathPresentation {
        if self.use_absolute_paths {
            PathPresentation::Absolute
        } else {
            PathPresentation::Relative
        }
    }
}

/// How suggested import paths are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PathPresentation {
    /// Paths relative to the controllers root (`./hello_controller`).
    #[default]
    Relative,

    /// Absolute filesystem paths.
    Absolute,
}

impl PathPresentation {
    /// Returns `true` for [`PathPresentation::Absolute`].
    #[inline]
    #[must_use]
    pub const fn is_absolute(self) -> bool {
        matches!(self, Self::Absolute)
    }
}

/// Where a resolved settings value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsSource {
    /// The settings store answered for this project.
    Loaded,

    /// The lookup failed and defaults were used instead.
    Fallback,
}

impl SettingsSource {
    /// Returns `true` if defaults were used because the lookup failed.
    #[inline]
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// Settings for one request, together with their provenance.
///
/// # Examples
///
/// ```
/// use sd_core::{ProjectSettings, ResolvedSettings, SettingsSource};
///
/// let resolved = ResolvedSettings::fallback();
/// assert!(resolved.source.is_fallback());
/// assert_eq!(resolved.settings, ProjectSettings::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSettings {
    /// The effective settings for the request.
    pub settings: ProjectSettings,

    /// Whether the settings were loaded or defaulted.
    pub source: SettingsSource,
}

impl ResolvedSettings {
    /// Wraps settings the store successfully answered with.
    #[inline]
    #[must_use]
    pub const fn loaded(settings: ProjectSettings) -> Self {
        Self {
            settings,
            source: SettingsSource::Loaded,
        }
    }

    /// The default settings, marked as a fallback after a failed lookup.
    #[inline]
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            settings: ProjectSettings {
                use_absolute_paths: false,
            },
            source: SettingsSource::Fallback,
        }
    }

    /// Returns the path presentation mode of the effective settings.
    #[inline]
    #[must_use]
    pub const fn path_presentation(&self) -> PathPresentation {
        self.settings.path_presentation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_settings_defaults() {
        let settings = ProjectSettings::default();
        assert!(!settings.use_absolute_paths);
        assert_eq!(settings.path_presentation(), PathPresentation::Relative);
    }

    #[test]
    fn test_project_settings_deserialize_camel_case() {
        let settings: ProjectSettings =
            serde_json::from_str(r#"{"useAbsolutePaths": true}"#).unwrap();
        assert!(settings.use_absolute_paths);
        assert_eq!(settings.path_presentation(), PathPresentation::Absolute);
    }

    #[test]
    fn test_project_settings_deserialize_with_missing_fields() {
        let settings: ProjectSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, ProjectSettings::default());
    }

    #[test]
    fn test_resolved_settings_loaded() {
        let resolved = ResolvedSettings::loaded(ProjectSettings {
            use_absolute_paths: true,
        });
        assert_eq!(resolved.source, SettingsSource::Loaded);
        assert!(!resolved.source.is_fallback());
        assert!(resolved.path_presentation().is_absolute());
    }

    #[test]
    fn test_resolved_settings_fallback_uses_defaults() {
        let resolved = ResolvedSettings::fallback();
        assert!(resolved.source.is_fallback());
        assert_eq!(resolved.settings, ProjectSettings::default());
        assert_eq!(resolved.path_presentation(), PathPresentation::Relative);
    }
}
