//! Transactional rewriting of entry-point files.
//!
//! A [`RewriteTransaction`] owns the full lifecycle of one analysis request's
//! disk mutation:
//!
//! 1. [`prepare`](RewriteTransaction::prepare) backs up each entry point and
//!    rewrites its alias imports in place, so the analyzer can resolve them.
//! 2. The caller runs its analysis while the rewritten files are on disk.
//! 3. [`restore`](RewriteTransaction::restore) writes every original back,
//!    byte for byte.
//!
//! The transaction is owned by a single request; there is no shared map of
//! pending backups. Callers must invoke `restore` on every path out of the
//! analysis step, success or failure. As a last resort, dropping a dirty
//! transaction restores synchronously and logs an error per path.

use std::borrow::Cow;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use smallvec::SmallVec;
use tokio::fs;
use tracing::{debug, error, warn};

use sd_core::{fx_hash_map, FxHashMap};

use crate::alias::{AliasRewriter, ControllersAliasRewriter};
use crate::entry_points::entry_point_candidates;

/// What `prepare` did with one entry-point candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PrepareAction {
    /// The candidate does not exist. Not an error; most projects have only
    /// one of the two spellings.
    Missing,

    /// The candidate exists but could not be read. Logged and skipped.
    Unreadable(io::ErrorKind),

    /// The candidate is already backed up by this transaction. The earliest
    /// original is kept; the on-disk content is not re-read.
    AlreadyPrepared,

    /// The candidate contains no alias imports. No backup, no disk write.
    Unchanged,

    /// Alias imports were rewritten and the original content backed up.
    Rewritten,

    /// The rewritten content could not be written. The backup is kept, since
    /// the on-disk state after a failed write is unknown.
    WriteFailed(io::ErrorKind),
}

/// Per-candidate outcome of [`RewriteTransaction::prepare`].
#[derive(Debug, Default)]
pub struct PrepareReport {
    /// One entry per candidate path, in candidate order.
    pub actions: Vec<(Utf8PathBuf, PrepareAction)>,
}

impl PrepareReport {
    fn record(&mut self, path: Utf8PathBuf, action: PrepareAction) {
        self.actions.push((path, action));
    }

    /// Returns the action taken for `path`, if it was a candidate.
    #[must_use]
    pub fn action_for(&self, path: &Utf8Path) -> Option<PrepareAction> {
        self.actions
            .iter()
            .find(|(candidate, _)| candidate == path)
            .map(|(_, action)| *action)
    }

    /// Number of entry points whose content was rewritten on disk.
    #[must_use]
    pub fn rewritten_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|(_, action)| matches!(action, PrepareAction::Rewritten))
            .count()
    }
}

/// Per-path outcome of [`RewriteTransaction::restore`].
///
/// A failed path keeps its backup entry, so a later `restore` call (or the
/// drop handler) can retry it.
#[derive(Debug, Default)]
pub struct RestoreReport {
    /// Paths whose original content is back on disk.
    pub restored: Vec<Utf8PathBuf>,

    /// Paths whose original content could not be written, with the error.
    pub failed: Vec<(Utf8PathBuf, io::Error)>,
}

impl RestoreReport {
    /// Returns `true` if every backed-up path was restored.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A per-request rewrite transaction over a project's entry points.
///
/// # Invariant
///
/// A path with a backup entry means the file on disk currently differs from
/// its original content and must be restored before the transaction is
/// closed. `prepare` therefore backs up *before* writing, never stores a
/// backup for a no-op rewrite, and never overwrites an existing backup.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use sd_rewrite::RewriteTransaction;
///
/// # async fn example() -> std::io::Result<()> {
/// let mut txn = RewriteTransaction::for_project(Utf8Path::new("/work/shop"));
/// txn.prepare().await;
/// // ... run analysis over the rewritten entry points ...
/// txn.restore().await;
/// # Ok(())
/// # }
/// ```
pub struct RewriteTransaction<R: AliasRewriter = ControllersAliasRewriter> {
    /// Entry-point candidates, visited in order during `prepare`.
    candidates: SmallVec<[Utf8PathBuf; 2]>,

    /// Original content per rewritten path, pending restoration.
    backups: FxHashMap<Utf8PathBuf, String>,

    /// The alias transform applied to each readable candidate.
    rewriter: R,
}

impl<R: AliasRewriter> std::fmt::Debug for RewriteTransaction<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteTransaction")
            .field("candidates", &self.candidates)
            .field("pending_restores", &self.backups.len())
            .finish_non_exhaustive()
    }
}

impl RewriteTransaction<ControllersAliasRewriter> {
    /// Creates a transaction over the project's entry points with the
    /// default `controllers/` alias rewriter.
    #[must_use]
    pub fn for_project(project_root: &Utf8Path) -> Self {
        Self::with_rewriter(project_root, ControllersAliasRewriter::new())
    }
}

impl<R: AliasRewriter> RewriteTransaction<R> {
    /// Creates a transaction using a custom alias rewriter.
    #[must_use]
    pub fn with_rewriter(project_root: &Utf8Path, rewriter: R) -> Self {
        Self {
            candidates: entry_point_candidates(project_root),
            backups: fx_hash_map(),
            rewriter,
        }
    }

    /// Returns `true` while any entry point still awaits restoration.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.backups.is_empty()
    }

    /// Backs up and rewrites each entry-point candidate in place.
    ///
    /// Candidates are handled independently: a missing or unreadable file
    /// never aborts the rest. Files whose rewrite is a no-op are left alone
    /// entirely, with no backup and no disk write. Calling `prepare` again
    /// while a path is still backed up keeps the earliest original; the
    /// mutated on-disk content is never re-read as if it were original.
    pub async fn prepare(&mut self) -> PrepareReport {
        let mut report = PrepareReport::default();

        for path in &self.candidates {
            if self.backups.contains_key(path) {
                debug!(path = %path, "Entry point already backed up, keeping earliest original");
                report.record(path.clone(), PrepareAction::AlreadyPrepared);
                continue;
            }

            let original = match fs::read_to_string(path).await {
                Ok(content) => content,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    report.record(path.clone(), PrepareAction::Missing);
                    continue;
                }
                Err(e) => {
                    warn!(path = %path, error = %e, "Failed to read entry point, skipping");
                    report.record(path.clone(), PrepareAction::Unreadable(e.kind()));
                    continue;
                }
            };

            let rewritten = match self.rewriter.rewrite(&original) {
                Cow::Borrowed(_) => {
                    report.record(path.clone(), PrepareAction::Unchanged);
                    continue;
                }
                Cow::Owned(rewritten) => rewritten,
            };
            if rewritten == original {
                report.record(path.clone(), PrepareAction::Unchanged);
                continue;
            }

            // Back up before the write; a partial write still needs restoring.
            self.backups.insert(path.clone(), original);

            match fs::write(path, &rewritten).await {
                Ok(()) => {
                    debug!(path = %path, "Rewrote alias imports in entry point");
                    report.record(path.clone(), PrepareAction::Rewritten);
                }
                Err(e) => {
                    warn!(path = %path, error = %e, "Failed to write rewritten entry point");
                    report.record(path.clone(), PrepareAction::WriteFailed(e.kind()));
                }
            }
        }

        report
    }

    /// Writes every backed-up original back to disk.
    ///
    /// Paths are restored independently; one failure is logged and reported
    /// but does not block the remaining paths. A failed path keeps its
    /// backup so restoration can be retried.
    pub async fn restore(&mut self) -> RestoreReport {
        let mut report = RestoreReport::default();

        let mut paths: Vec<Utf8PathBuf> = self.backups.keys().cloned().collect();
        paths.sort_unstable();

        for path in paths {
            let Some(original) = self.backups.get(&path) else {
                continue;
            };
            match fs::write(&path, original).await {
                Ok(()) => {
                    self.backups.remove(&path);
                    debug!(path = %path, "Restored entry point");
                    report.restored.push(path);
                }
                Err(e) => {
                    error!(path = %path, error = %e, "Failed to restore entry point");
                    report.failed.push((path, e));
                }
            }
        }

        report
    }
}

impl<R: AliasRewriter> Drop for RewriteTransaction<R> {
    fn drop(&mut self) {
        // Drop cannot await; restore the stragglers synchronously.
        for (path, original) in &self.backups {
            match std::fs::write(path, original) {
                Ok(()) => {
                    error!(path = %path, "Entry point restored during drop; restore() did not run to completion");
                }
                Err(e) => {
                    error!(path = %path, error = %e, "Failed to restore entry point during drop");
                }
            }
        }
        self.backups.clear();
    }
}
