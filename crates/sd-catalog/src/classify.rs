//! Registration classification.
//!
//! Splits the analyzer's raw view of a project into the three buckets the
//! catalog response reports: registered controllers, unregistered controllers
//! in the project's own tree, and unregistered controllers shipped by
//! `node_modules` packages.
//!
//! Matching is by path equality (see
//! [`RegisteredController::matches`]); identifiers play no part in it. Within
//! each discovery source, duplicate paths collapse to the first occurrence.
//!
//! # Examples
//!
//! ```
//! use sd_catalog::classify::classify;
//! use sd_core::{ControllerDefinition, RegisteredController};
//!
//! let registered = vec![RegisteredController::new("controllers/x_controller.js", "x")];
//! let definitions = vec![
//!     ControllerDefinition::new("controllers/x_controller.js", "x"),
//!     ControllerDefinition::new("controllers/y_controller.js", "y"),
//! ];
//!
//! let classification = classify(registered, definitions, Vec::new());
//! assert_eq!(classification.registered.len(), 1);
//! assert_eq!(classification.unregistered_project.len(), 1);
//! assert_eq!(classification.unregistered_project[0].guessed_identifier, "y");
//! ```

use camino::Utf8Path;
use sd_core::{
    fx_hash_set_with_capacity, ControllerDefinition, DetectedModule, FxHashSet,
    RegisteredController,
};

/// Packages whose controller definitions are never reported.
///
/// The framework itself and its companion libraries define controller base
/// classes that are not meant to be registered by applications.
pub const EXCLUDED_MODULES: [&str; 2] = ["@hotwired/stimulus", "stimulus-use"];

/// The classified view of one analysis snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Controllers the application registers, sorted by identifier.
    pub registered: Vec<RegisteredController>,

    /// Unregistered definitions from the project's own tree, sorted by
    /// guessed identifier.
    pub unregistered_project: Vec<ControllerDefinition>,

    /// Packages with unregistered definitions, sorted by package name.
    /// Definitions within each package are sorted by guessed identifier.
    pub unregistered_modules: Vec<DetectedModule>,
}

impl Classification {
    /// Returns `true` if nothing was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
            && self.unregistered_project.is_empty()
            && self.unregistered_modules.is_empty()
    }
}

/// Collects the set of registered source paths for membership tests.
#[must_use]
pub fn registered_paths(registered: &[RegisteredController]) -> FxHashSet<&Utf8Path> {
    let mut paths = fx_hash_set_with_capacity(registered.len());
    for controller in registered {
        paths.insert(controller.path.as_path());
    }
    paths
}

/// Classifies an analysis snapshot into the reported buckets.
///
/// A definition is registered when its path appears in `registered`.
/// Duplicate paths within `project_definitions`, and within each module's
/// definition list, keep only their first occurrence. Modules named in
/// [`EXCLUDED_MODULES`], and modules left with no definitions, are dropped.
///
/// All sorts are stable, so entries with equal keys keep the order the
/// analyzer produced them in.
#[must_use]
pub fn classify(
    mut registered: Vec<RegisteredController>,
    mut project_definitions: Vec<ControllerDefinition>,
    modules: Vec<DetectedModule>,
) -> Classification {
    let paths = registered_paths(&registered);

    let mut seen = fx_hash_set_with_capacity(project_definitions.len());
    project_definitions
        .retain(|def| !paths.contains(def.path.as_path()) && seen.insert(def.path.clone()));

    let mut unregistered_modules: Vec<DetectedModule> = modules
        .into_iter()
        .filter(|module| !EXCLUDED_MODULES.contains(&module.name.as_str()))
        .filter_map(|mut module| {
            let mut seen = fx_hash_set_with_capacity(module.controller_definitions.len());
            module
                .controller_definitions
                .retain(|def| !paths.contains(def.path.as_path()) && seen.insert(def.path.clone()));
            if module.controller_definitions.is_empty() {
                None
            } else {
                module
                    .controller_definitions
                    .sort_by(|a, b| a.guessed_identifier.cmp(&b.guessed_identifier));
                Some(module)
            }
        })
        .collect();
    unregistered_modules.sort_by(|a, b| a.name.cmp(&b.name));

    project_definitions.sort_by(|a, b| a.guessed_identifier.cmp(&b.guessed_identifier));
    registered.sort_by(|a, b| a.identifier.cmp(&b.identifier));

    Classification {
        registered,
        unregistered_project: project_definitions,
        unregistered_modules,
    }
}
