//! The catalog service: one request, end to end.
//!
//! [`CatalogService`] owns the project paths and the three collaborators and
//! runs the full request sequence: resolve settings, rewrite the entry
//! points, refresh the analyzer, restore the entry points, classify, and
//! assemble the response.

use std::fmt;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use sd_rewrite::RewriteTransaction;
use tracing::{debug, info, warn};

use crate::analyzer::ControllerAnalyzer;
use crate::classify::classify;
use crate::error::CatalogError;
use crate::response::ControllerCatalog;
use crate::settings::{resolve_settings, SettingsProvider};
use crate::suggest::ImportSuggester;

/// Default delay applied by [`CatalogService::catalog_after_change`].
pub const DEFAULT_CHANGE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Orchestrates catalog requests for one project.
///
/// # Request Sequence
///
/// 1. Resolve per-project settings, defaulting on failure.
/// 2. Rewrite alias imports in the controller entry points to relative form.
/// 3. Refresh the analyzer so it observes the rewritten files.
/// 4. Restore the entry points, whether or not analysis succeeded.
/// 5. Classify the analyzer's snapshot and attach import suggestions.
///
/// Restoration also runs from the rewrite transaction's drop handler, so a
/// request future dropped mid-analysis still puts the files back.
///
/// # Overlapping Requests
///
/// The service takes no lock around the rewrite window. A second request
/// started while another has the entry points rewritten will back up the
/// rewritten content as its original. Callers must serialize requests per
/// project to avoid that hazard.
pub struct CatalogService<A, P, S> {
    project_root: Utf8PathBuf,
    project_id: String,
    analyzer: A,
    settings: P,
    suggester: S,
    change_debounce: Duration,
}

impl<A, P, S> CatalogService<A, P, S>
where
    A: ControllerAnalyzer,
    P: SettingsProvider,
    S: ImportSuggester,
{
    /// Creates a service for the project rooted at `project_root`.
    ///
    /// `project_id` is the key used for settings lookups.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if `project_root` does not exist or
    /// is not a directory.
    pub fn new(
        project_root: impl Into<Utf8PathBuf>,
        project_id: impl Into<String>,
        analyzer: A,
        settings: P,
        suggester: S,
    ) -> Result<Self, CatalogError> {
        let project_root = project_root.into();
        if !project_root.exists() {
            return Err(CatalogError::config(format!(
                "project root {project_root} does not exist"
            )));
        }
        if !project_root.is_dir() {
            return Err(CatalogError::config(format!(
                "project root {project_root} is not a directory"
            )));
        }

        Ok(Self {
            project_root,
            project_id: project_id.into(),
            analyzer,
            settings,
            suggester,
            change_debounce: DEFAULT_CHANGE_DEBOUNCE,
        })
    }

    /// Overrides the delay used by [`catalog_after_change`](Self::catalog_after_change).
    #[must_use]
    pub const fn with_change_debounce(mut self, debounce: Duration) -> Self {
        self.change_debounce = debounce;
        self
    }

    /// The validated project root.
    #[inline]
    #[must_use]
    pub fn project_root(&self) -> &Utf8Path {
        &self.project_root
    }

    /// The delay applied before a change-triggered catalog run.
    #[inline]
    #[must_use]
    pub const fn change_debounce(&self) -> Duration {
        self.change_debounce
    }

    /// Runs one full catalog request.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Analyzer`] if the analyzer's refresh fails.
    /// The entry points are restored before the error is returned. Settings
    /// failures never surface here; they resolve to default settings.
    pub async fn catalog(&self) -> Result<ControllerCatalog, CatalogError> {
        let resolved = resolve_settings(&self.settings, &self.project_id).await;
        let mode = resolved.path_presentation();
        debug!(
            project = %self.project_id,
            fallback = resolved.source.is_fallback(),
            absolute_paths = mode.is_absolute(),
            "Resolved project settings"
        );

        let mut transaction = RewriteTransaction::for_project(&self.project_root);
        let prepared = transaction.prepare().await;
        debug!(rewritten = prepared.rewritten_count(), "Entry points prepared");

        let analysis = self.analyzer.refresh().await;

        // Restore before inspecting the analysis result.
        let restored = transaction.restore().await;
        if !restored.is_clean() {
            warn!(
                failed = restored.failed.len(),
                "Entry-point restore left files rewritten"
            );
        }

        analysis?;

        let classification = classify(
            self.analyzer.registered_controllers(),
            self.analyzer.controller_definitions(),
            self.analyzer.detected_modules(),
        );
        info!(
            project = %self.project_id,
            registered = classification.registered.len(),
            unregistered = classification.unregistered_project.len(),
            packages = classification.unregistered_modules.len(),
            "Classified controllers"
        );

        Ok(ControllerCatalog::from_classification(
            classification,
            &self.suggester,
            mode,
        ))
    }

    /// Waits out the change debounce, then runs [`catalog`](Self::catalog).
    ///
    /// The delay coalesces editor-side bursts of change notifications; it is
    /// not a correctness mechanism.
    ///
    /// # Errors
    ///
    /// Same as [`catalog`](Self::catalog).
    pub async fn catalog_after_change(&self) -> Result<ControllerCatalog, CatalogError> {
        debug!(debounce = ?self.change_debounce, "Debouncing change notification");
        tokio::time::sleep(self.change_debounce).await;
        self.catalog().await
    }
}

impl<A, P, S> fmt::Debug for CatalogService<A, P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogService")
            .field("project_root", &self.project_root)
            .field("project_id", &self.project_id)
            .field("change_debounce", &self.change_debounce)
            .finish_non_exhaustive()
    }
}
