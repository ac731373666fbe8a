//! Controller cataloging for Stimulus projects.
//!
//! This crate answers one question for an editor integration: *which
//! controllers does this project have, and which of them are actually
//! registered?* It orchestrates the alias-rewrite transaction from
//! [`sd_rewrite`], delegates discovery to a host-provided analyzer, and
//! shapes the result into the JSON payload the editor renders.
//!
//! # Request Flow
//!
//! 1. [`resolve_settings`] fetches per-project settings, defaulting on
//!    failure.
//! 2. A [`sd_rewrite::RewriteTransaction`] rewrites alias imports in the
//!    controller entry points to relative form.
//! 3. [`ControllerAnalyzer::refresh`] runs against the rewritten files.
//! 4. The transaction restores the entry points, regardless of the analysis
//!    outcome.
//! 5. [`classify`] partitions the analyzer's snapshot and
//!    [`ControllerCatalog::from_classification`] attaches import suggestions.
//!
//! # Modules
//!
//! - [`service`] - the [`CatalogService`] request orchestrator
//! - [`analyzer`] - the [`ControllerAnalyzer`] collaborator trait
//! - [`settings`] - the [`SettingsProvider`] collaborator trait
//! - [`classify`] - registration classification
//! - [`suggest`] - import statement suggestions
//! - [`conventions`] - Stimulus naming conventions
//! - [`response`] - the serialized response shape
//! - [`error`] - error types
//!
//! # Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use camino::Utf8Path;
//! use sd_catalog::{
//!     AnalyzerError, CatalogService, ControllerAnalyzer, ConventionalImportSuggester,
//!     SettingsProvider,
//! };
//! use sd_core::{
//!     ControllerDefinition, DetectedModule, ProjectSettings, RegisteredController, SettingsError,
//! };
//!
//! struct HostAnalyzer;
//!
//! #[async_trait]
//! impl ControllerAnalyzer for HostAnalyzer {
//!     async fn refresh(&self) -> Result<(), AnalyzerError> {
//!         Ok(())
//!     }
//!
//!     fn controller_definitions(&self) -> Vec<ControllerDefinition> {
//!         Vec::new()
//!     }
//!
//!     fn registered_controllers(&self) -> Vec<RegisteredController> {
//!         Vec::new()
//!     }
//!
//!     fn detected_modules(&self) -> Vec<DetectedModule> {
//!         Vec::new()
//!     }
//! }
//!
//! struct HostSettings;
//!
//! #[async_trait]
//! impl SettingsProvider for HostSettings {
//!     async fn project_settings(&self, _project_id: &str) -> Result<ProjectSettings, SettingsError> {
//!         Ok(ProjectSettings::default())
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), sd_catalog::CatalogError> {
//! let root = Utf8Path::new("/srv/app");
//! let service = CatalogService::new(
//!     root,
//!     "app",
//!     HostAnalyzer,
//!     HostSettings,
//!     ConventionalImportSuggester::new(root),
//! )?;
//!
//! let catalog = service.catalog().await?;
//! println!(
//!     "{} registered controllers",
//!     catalog.registered.controller_definitions.len()
//! );
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod analyzer;
pub mod classify;
pub mod conventions;
pub mod error;
pub mod response;
pub mod service;
pub mod settings;
pub mod suggest;

pub use analyzer::ControllerAnalyzer;
pub use classify::{classify, registered_paths, Classification, EXCLUDED_MODULES};
pub use error::{AnalyzerError, CatalogError};
pub use response::{
    ControllerCatalog, ControllerEntry, ControllerGroup, UnregisteredControllers, PROJECT_GROUP,
};
pub use service::{CatalogService, DEFAULT_CHANGE_DEBOUNCE};
pub use settings::{resolve_settings, SettingsProvider};
pub use suggest::{ConventionalImportSuggester, ImportSuggester, ImportSuggestion};
