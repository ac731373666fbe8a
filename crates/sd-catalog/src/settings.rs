//! Per-project settings lookup.
//!
//! Settings live with the host editor integration, not with this crate, so
//! the service reaches them through the [`SettingsProvider`] trait. Lookup
//! failures are deliberately soft: a catalog request must still answer when
//! the settings channel is down, so [`resolve_settings`] degrades to the
//! defaults instead of propagating the error.

use async_trait::async_trait;
use sd_core::{ProjectSettings, ResolvedSettings, SettingsError};
use tracing::warn;

/// A source of per-project settings.
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// Fetches the settings configured for `project_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the settings cannot be read or parsed.
    /// Callers that can proceed without them should go through
    /// [`resolve_settings`] instead of handling the error themselves.
    async fn project_settings(&self, project_id: &str) -> Result<ProjectSettings, SettingsError>;
}

/// Fetches settings for `project_id`, falling back to defaults on failure.
///
/// The returned [`ResolvedSettings`] records whether the values were loaded
/// or defaulted, so responses can tell the two apart.
pub async fn resolve_settings<P>(provider: &P, project_id: &str) -> ResolvedSettings
where
    P: SettingsProvider + ?Sized,
{
    match provider.project_settings(project_id).await {
        Ok(settings) => ResolvedSettings::loaded(settings),
        Err(error) => {
            warn!(project = %project_id, error = %error, "Settings lookup failed, using defaults");
            ResolvedSettings::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sd_core::{PathPresentation, SettingsSource};

    struct FixedSettings(ProjectSettings);

    #[async_trait]
    impl SettingsProvider for FixedSettings {
        async fn project_settings(&self, _project_id: &str) -> Result<ProjectSettings, SettingsError> {
            Ok(self.0)
        }
    }

    struct UnavailableSettings;

    #[async_trait]
    impl SettingsProvider for UnavailableSettings {
        async fn project_settings(&self, _project_id: &str) -> Result<ProjectSettings, SettingsError> {
            Err(SettingsError::unavailable("editor connection lost"))
        }
    }

    #[tokio::test]
    async fn test_resolve_settings_uses_loaded_values() {
        let provider = FixedSettings(ProjectSettings {
            use_absolute_paths: true,
        });
        let resolved = resolve_settings(&provider, "app-1").await;
        assert_eq!(resolved.source, SettingsSource::Loaded);
        assert_eq!(resolved.path_presentation(), PathPresentation::Absolute);
    }

    #[tokio::test]
    async fn test_resolve_settings_falls_back_on_failure() {
        let resolved = resolve_settings(&UnavailableSettings, "app-1").await;
        assert_eq!(resolved.source, SettingsSource::Fallback);
        assert_eq!(resolved.path_presentation(), PathPresentation::Relative);
        assert!(resolved.source.is_fallback());
    }

    #[tokio::test]
    async fn test_resolve_settings_works_through_trait_object() {
        let provider: Box<dyn SettingsProvider> = Box::new(UnavailableSettings);
        let resolved = resolve_settings(provider.as_ref(), "app-1").await;
        assert!(resolved.source.is_fallback());
    }
}
