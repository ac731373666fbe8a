//! Transactional alias-import rewriting for controller entry points.
//!
//! Stimulus-style projects may import controllers through a bundler alias
//! (`controllers/…`) that filesystem-based analyzers cannot resolve. This
//! crate rewrites those imports to relative form for the duration of one
//! analysis pass and guarantees the original bytes are back on disk when the
//! pass is over.
//!
//! # Lifecycle
//!
//! ```text
//!  prepare()                 analysis                  restore()
//!  ┌───────────────────┐     ┌──────────────────┐     ┌──────────────────┐
//!  │ read entry point  │     │ analyzer observes│     │ write backed-up  │
//!  │ back up original  │ ──> │ rewritten        │ ──> │ original content │
//!  │ rewrite aliases   │     │ entry points     │     │ per path         │
//!  └───────────────────┘     └──────────────────┘     └──────────────────┘
//! ```
//!
//! `restore()` must run on every path out of the analysis step, including
//! error paths. Dropping a dirty [`RewriteTransaction`] restores as a last
//! resort and logs the lapse.
//!
//! # Usage
//!
//! ```no_run
//! use camino::Utf8Path;
//! use sd_rewrite::RewriteTransaction;
//!
//! # async fn example() {
//! let mut txn = RewriteTransaction::for_project(Utf8Path::new("/work/shop"));
//!
//! let prepared = txn.prepare().await;
//! tracing::debug!(rewritten = prepared.rewritten_count(), "Entry points prepared");
//!
//! // ... trigger the analyzer here ...
//!
//! let restored = txn.restore().await;
//! assert!(restored.is_clean());
//! # }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod alias;
pub mod entry_points;
mod transaction;

// Re-export main types for convenient access
pub use alias::{AliasRewriter, ControllersAliasRewriter};
pub use entry_points::{controllers_root, entry_point_candidates, CONTROLLERS_DIR};
pub use transaction::{PrepareAction, PrepareReport, RestoreReport, RewriteTransaction};
