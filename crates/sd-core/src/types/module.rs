//! Dependency package types.
//!
//! A [`DetectedModule`] is a third-party package (typically under
//! `node_modules/`) that ships its own controller definitions, discovered by
//! scanning the package's published source files.

use serde::{Deserialize, Serialize};

use crate::ControllerDefinition;

/// A third-party dependency package containing controller definitions.
///
/// # Examples
///
/// ```
/// use sd_core::{ControllerDefinition, DetectedModule};
///
/// let mut module = DetectedModule::new("stimulus-clipboard");
/// module.add_definition(ControllerDefinition::new(
///     "node_modules/stimulus-clipboard/dist/index.js",
///     "clipboard",
/// ));
///
/// assert_eq!(module.name, "stimulus-clipboard");
/// assert_eq!(module.controller_definitions.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedModule {
    /// Package name as published (e.g. `stimulus-clipboard`, `@scoped/pkg`).
    pub name: String,

    /// Definitions discovered inside the package, in discovery order.
    pub controller_definitions: Vec<ControllerDefinition>,
}

impl DetectedModule {
    /// Creates a module with no definitions.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller_definitions: Vec::new(),
        }
    }

    /// Replaces the definition list, preserving builder style.
    #[must_use]
    pub fn with_definitions(mut self, definitions: Vec<ControllerDefinition>) -> Self {
        self.controller_definitions = definitions;
        self
    }

    /// Appends a discovered definition.
    pub fn add_definition(&mut self, definition: ControllerDefinition) {
        self.controller_definitions.push(definition);
    }

    /// Returns `true` if the package contributed no definitions.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controller_definitions.is_empty()
    }
}
