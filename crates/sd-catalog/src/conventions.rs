//! Stimulus naming conventions.
//!
//! Stimulus ties three names together: the controller's file path, the
//! identifier it registers under, and the class name an import statement
//! binds. This module holds the two conversions the catalog needs, so every
//! suggestion and every analyzer adapter agrees on the same mapping.

use camino::Utf8Path;

const CLASS_SUFFIX: &str = "Controller";
const FILE_SUFFIX: &str = "-controller";

/// Derives the conventional class name for a controller identifier.
///
/// Identifier segments are split on `-` and `_`, capitalized, and joined,
/// then `Controller` is appended. The `--` namespace separator collapses
/// into the same rule because its empty middle segment is skipped.
///
/// # Examples
///
/// ```
/// use sd_catalog::conventions::local_name_for_identifier;
///
/// assert_eq!(local_name_for_identifier("hello"), "HelloController");
/// assert_eq!(local_name_for_identifier("date-picker"), "DatePickerController");
/// assert_eq!(local_name_for_identifier("users--list"), "UsersListController");
/// ```
#[must_use]
pub fn local_name_for_identifier(identifier: &str) -> String {
    let mut name = String::with_capacity(identifier.len() + CLASS_SUFFIX.len());
    for segment in identifier.split(['-', '_']).filter(|s| !s.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name.push_str(CLASS_SUFFIX);
    name
}

/// Derives the identifier a controller file registers under by convention.
///
/// `relative_path` is the controller's path relative to the controllers
/// root. The extension and any `_controller`/`-controller` suffix are
/// dropped, underscores become dashes, and directory separators become the
/// `--` namespace separator.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use sd_catalog::conventions::identifier_for_controller_path;
///
/// let identifier = identifier_for_controller_path(Utf8Path::new("users/list_controller.js"));
/// assert_eq!(identifier, "users--list");
/// ```
#[must_use]
pub fn identifier_for_controller_path(relative_path: &Utf8Path) -> String {
    let logical = relative_path.with_extension("");
    let mut segments: Vec<String> = logical
        .components()
        .map(|component| component.as_str().replace('_', "-"))
        .collect();
    if let Some(last) = segments.last_mut() {
        if let Some(stripped) = last.strip_suffix(FILE_SUFFIX) {
            *last = stripped.to_owned();
        }
    }
    segments.join("--")
}
