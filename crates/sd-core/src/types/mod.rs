//! Domain types for controller discovery and classification.
//!
//! # Module Organization
//!
//! - [`location`] - Source code locations
//! - [`controller`] - Controller definitions and registrations
//! - [`module`] - Third-party dependency packages
//!
//! # Re-exports
//!
//! All public types are re-exported at this module level and at the crate
//! root for convenience:
//!
//! ```
//! use sd_core::{ControllerDefinition, DetectedModule, RegisteredController};
//! ```

mod controller;
mod location;
mod module;

// Re-export all public types
pub use controller::{ControllerDefinition, RegisteredController};
pub use location::SourceLocation;
pub use module::DetectedModule;
