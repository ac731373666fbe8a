//! Core types, settings, and utilities for stimdex.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Domain types for controller discovery ([`ControllerDefinition`],
//!   [`RegisteredController`], [`DetectedModule`], [`SourceLocation`])
//! - Project settings with explicit provenance ([`ProjectSettings`],
//!   [`ResolvedSettings`])
//! - The settings error taxonomy ([`SettingsError`])
//! - Type aliases for `FxHashMap`/`FxHashSet` (faster than std)
//!
//! # Identity Model
//!
//! Controller matching is by **path equality**: a [`ControllerDefinition`]
//! counts as registered exactly when some [`RegisteredController`] shares its
//! filesystem path. Identifiers never participate in matching because the
//! registered identifier may differ from the guessed one.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod types;

// Re-export main types for convenient access
pub use config::{PathPresentation, ProjectSettings, ResolvedSettings, SettingsSource};
pub use error::SettingsError;
pub use hash::{fx_hash_map, fx_hash_set_with_capacity, FxBuildHasher, FxHashMap, FxHashSet};
pub use types::{ControllerDefinition, DetectedModule, RegisteredController, SourceLocation};
