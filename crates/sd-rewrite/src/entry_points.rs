//! Entry-point file conventions.
//!
//! A project registers its controllers from a central entry point under the
//! controllers root. The candidate set is fixed and small: the JavaScript and
//! TypeScript spellings of `index` in `app/javascript/controllers/`.

use camino::{Utf8Path, Utf8PathBuf};
use smallvec::SmallVec;

/// Directory holding controller sources, relative to the project root.
pub const CONTROLLERS_DIR: &str = "app/javascript/controllers";

/// File names an entry point may use inside [`CONTROLLERS_DIR`].
pub const ENTRY_POINT_NAMES: [&str; 2] = ["index.js", "index.ts"];

/// Returns the absolute controllers root for a project.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use sd_rewrite::entry_points::controllers_root;
///
/// let root = controllers_root(Utf8Path::new("/work/shop"));
/// assert_eq!(root, "/work/shop/app/javascript/controllers");
/// ```
#[must_use]
pub fn controllers_root(project_root: &Utf8Path) -> Utf8PathBuf {
    project_root.join(CONTROLLERS_DIR)
}

/// Returns the entry-point candidate paths for a project.
///
/// Candidates may or may not exist on disk; a missing candidate is skipped
/// during transaction preparation rather than treated as an error.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use sd_rewrite::entry_points::entry_point_candidates;
///
/// let candidates = entry_point_candidates(Utf8Path::new("/work/shop"));
/// assert_eq!(candidates.len(), 2);
/// assert_eq!(candidates[0], "/work/shop/app/javascript/controllers/index.js");
/// assert_eq!(candidates[1], "/work/shop/app/javascript/controllers/index.ts");
/// ```
#[must_use]
pub fn entry_point_candidates(project_root: &Utf8Path) -> SmallVec<[Utf8PathBuf; 2]> {
    let root = controllers_root(project_root);
    ENTRY_POINT_NAMES.iter().map(|name| root.join(name)).collect()
}
