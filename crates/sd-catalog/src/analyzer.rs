//! The controller analysis collaborator.
//!
//! The catalog service does not parse JavaScript itself. It delegates to a
//! [`ControllerAnalyzer`], which wraps whatever analysis engine the host
//! editor integration provides, and consumes the snapshot that engine
//! produces.

use async_trait::async_trait;
use sd_core::{ControllerDefinition, DetectedModule, RegisteredController};

use crate::error::AnalyzerError;

/// A source of controller analysis results for one project.
///
/// # Contract
///
/// [`refresh`](Self::refresh) is called while the project's controller entry
/// points are temporarily rewritten on disk, so the analyzer must re-read
/// files from disk rather than serve a cached parse. After a successful
/// refresh, the three accessor methods return the state observed during that
/// refresh:
///
/// - [`controller_definitions`](Self::controller_definitions): every
///   controller class found under the project's own source tree.
/// - [`registered_controllers`](Self::registered_controllers): every
///   controller the application explicitly registers.
/// - [`detected_modules`](Self::detected_modules): packages under
///   `node_modules` that ship controllers, with their definitions.
///
/// Accessors return owned snapshots. Implementations typically keep the
/// refreshed state behind interior mutability, which is why every method
/// takes `&self`.
#[async_trait]
pub trait ControllerAnalyzer: Send + Sync {
    /// Re-runs the analysis against the project on disk.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError`] when the underlying engine cannot complete
    /// the run. The caller restores any rewritten files before reporting the
    /// failure.
    async fn refresh(&self) -> Result<(), AnalyzerError>;

    /// Controller classes defined in the project's own source tree.
    fn controller_definitions(&self) -> Vec<ControllerDefinition>;

    /// Controllers the application registers with Stimulus.
    fn registered_controllers(&self) -> Vec<RegisteredController>;

    /// Packages under `node_modules` that contain controller definitions.
    fn detected_modules(&self) -> Vec<DetectedModule>;
}
