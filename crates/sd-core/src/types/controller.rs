//! Controller discovery types.
//!
//! This module provides the two sides of the controller model:
//!
//! - [`ControllerDefinition`] - a discovered candidate class that *could* be
//!   registered as a controller
//! - [`RegisteredController`] - a controller the application has actually
//!   wired up via explicit registration code
//!
//! A definition corresponds to a registration by **path equality**, never by
//! identifier equality: two discovery passes can disagree on the identifier
//! (guessed vs. explicitly registered), but the file is the identity.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::SourceLocation;

/// A discovered controller class, not yet known to be registered.
///
/// Definitions come from two discovery sources: the project's own source
/// tree, and third-party dependency packages (see
/// [`DetectedModule`](crate::DetectedModule)).
///
/// # Examples
///
/// ```
/// use sd_core::{ControllerDefinition, SourceLocation};
///
/// let def = ControllerDefinition::new("app/javascript/controllers/hello_controller.js", "hello")
///     .with_location(SourceLocation::new(3, 14));
///
/// assert_eq!(def.guessed_identifier, "hello");
/// assert_eq!(def.location.line, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControllerDefinition {
    /// Filesystem path of the defining source file.
    ///
    /// The semantic identity key: at most one definition per path survives a
    /// single discovery source, and registration matching uses this path.
    pub path: Utf8PathBuf,

    /// The identifier this controller would be registered under if
    /// auto-registered (e.g. `users--list` for
    /// `controllers/users/list_controller.js`).
    pub guessed_identifier: String,

    /// Location of the class declaration, for navigation.
    ///
    /// Defaults to line 1, column 1 when the declaration node is unknown.
    pub location: SourceLocation,
}

impl ControllerDefinition {
    /// Creates a definition with the default location (line 1, column 1).
    ///
    /// # Arguments
    ///
    /// * `path` - Filesystem path of the defining file
    /// * `guessed_identifier` - The auto-registration identifier
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, guessed_identifier: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            guessed_identifier: guessed_identifier.into(),
            location: SourceLocation::default(),
        }
    }

    /// Sets the location of the class declaration.
    #[inline]
    #[must_use]
    pub const fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }
}

/// A controller confirmed active via explicit registration code.
///
/// The `identifier` is the name the application registered the controller
/// under, which may differ from any definition's guessed identifier.
///
/// # Examples
///
/// ```
/// use sd_core::RegisteredController;
///
/// let reg = RegisteredController::new("app/javascript/controllers/hello_controller.js", "greeter");
/// assert_eq!(reg.identifier, "greeter");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegisteredController {
    /// Filesystem path of the controller's source file.
    pub path: Utf8PathBuf,

    /// The identifier the controller is registered under.
    pub identifier: String,

    /// Location of the registration's target declaration, for navigation.
    pub location: SourceLocation,
}

impl RegisteredController {
    /// Creates a registered controller with the default location.
    ///
    /// # Arguments
    ///
    /// * `path` - Filesystem path of the controller's source file
    /// * `identifier` - The registered identifier
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, identifier: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            identifier: identifier.into(),
            location: SourceLocation::default(),
        }
    }

    /// Sets the location of the registration's target declaration.
    #[inline]
    #[must_use]
    pub const fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    /// Returns `true` if `definition` refers to the same source file.
    ///
    /// Matching is by path equality only; identifiers are not compared.
    ///
    /// # Examples
    ///
    /// ```
    /// use sd_core::{ControllerDefinition, RegisteredController};
    ///
    /// let reg = RegisteredController::new("a/x_controller.js", "custom-name");
    /// let def = ControllerDefinition::new("a/x_controller.js", "x");
    ///
    /// assert!(reg.matches(&def));
    /// ```
    #[inline]
    #[must_use]
    pub fn matches(&self, definition: &ControllerDefinition) -> bool {
        self.path == definition.path
    }
}
