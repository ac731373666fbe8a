//! Import statement suggestions for unregistered controllers.
//!
//! Every unregistered controller in the response carries a ready-to-insert
//! import statement so the editor can offer registration as a one-click fix.
//! The statement's shape depends on where the controller lives and on the
//! project's path presentation setting.

use camino::{Utf8Path, Utf8PathBuf};
use sd_core::{ControllerDefinition, PathPresentation};
use sd_rewrite::controllers_root;

use crate::conventions::local_name_for_identifier;

/// A suggested import for one unregistered controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSuggestion {
    /// The full statement, e.g. `import HelloController from "./hello_controller"`.
    pub import_statement: String,

    /// The class name the statement binds, e.g. `HelloController`.
    pub local_name: String,
}

/// Produces import suggestions for unregistered controller definitions.
pub trait ImportSuggester: Send + Sync {
    /// Suggests an import for `definition` under the given presentation mode.
    fn suggest(
        &self,
        definition: &ControllerDefinition,
        mode: PathPresentation,
    ) -> ImportSuggestion;
}

/// The standard suggester, following Stimulus path conventions.
///
/// In [`PathPresentation::Relative`] mode, paths under the project's
/// controllers root become `./`-relative specifiers with the extension
/// dropped, and paths under `node_modules` become bare package specifiers.
/// In [`PathPresentation::Absolute`] mode the definition's path is used
/// verbatim.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use sd_catalog::{ConventionalImportSuggester, ImportSuggester};
/// use sd_core::{ControllerDefinition, PathPresentation};
///
/// let suggester = ConventionalImportSuggester::new(Utf8Path::new("/app"));
/// let def = ControllerDefinition::new(
///     "/app/app/javascript/controllers/hello_controller.js",
///     "hello",
/// );
///
/// let suggestion = suggester.suggest(&def, PathPresentation::Relative);
/// assert_eq!(
///     suggestion.import_statement,
///     r#"import HelloController from "./hello_controller""#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ConventionalImportSuggester {
    controllers_root: Utf8PathBuf,
}

impl ConventionalImportSuggester {
    /// Creates a suggester for the project rooted at `project_root`.
    #[must_use]
    pub fn new(project_root: &Utf8Path) -> Self {
        Self {
            controllers_root: controllers_root(project_root),
        }
    }

    /// Renders the relative-mode import path for a definition.
    fn import_path(&self, definition: &ControllerDefinition) -> String {
        if let Ok(relative) = definition.path.strip_prefix(&self.controllers_root) {
            format!("./{}", relative.with_extension(""))
        } else if let Some(package) = package_specifier(&definition.path) {
            package
        } else {
            definition.path.as_str().to_owned()
        }
    }
}

impl ImportSuggester for ConventionalImportSuggester {
    fn suggest(
        &self,
        definition: &ControllerDefinition,
        mode: PathPresentation,
    ) -> ImportSuggestion {
        let local_name = local_name_for_identifier(&definition.guessed_identifier);
        let path_text = if mode.is_absolute() {
            definition.path.as_str().to_owned()
        } else {
            self.import_path(definition)
        };
        let import_statement = format!("import {local_name} from \"{path_text}\"");
        ImportSuggestion {
            import_statement,
            local_name,
        }
    }
}

/// Bare package specifier for a path under `node_modules`, if any.
///
/// Scoped packages keep their scope: `node_modules/@acme/widgets/dist/a.js`
/// yields `@acme/widgets`.
fn package_specifier(path: &Utf8Path) -> Option<String> {
    let components: Vec<&str> = path.components().map(|c| c.as_str()).collect();
    let idx = components.iter().rposition(|c| *c == "node_modules")?;
    let first = components.get(idx + 1)?;
    if first.starts_with('@') {
        let name = components.get(idx + 2)?;
        Some(format!("{first}/{name}"))
    } else {
        Some((*first).to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggester() -> ConventionalImportSuggester {
        ConventionalImportSuggester::new(Utf8Path::new("/app"))
    }

    #[test]
    fn test_suggests_relative_import_for_project_controller() {
        let def = ControllerDefinition::new(
            "/app/app/javascript/controllers/hello_controller.js",
            "hello",
        );
        let suggestion = suggester().suggest(&def, PathPresentation::Relative);
        assert_eq!(
            suggestion.import_statement,
            r#"import HelloController from "./hello_controller""#
        );
        assert_eq!(suggestion.local_name, "HelloController");
    }

    #[test]
    fn test_suggests_nested_relative_import() {
        let def = ControllerDefinition::new(
            "/app/app/javascript/controllers/users/list_controller.js",
            "users--list",
        );
        let suggestion = suggester().suggest(&def, PathPresentation::Relative);
        assert_eq!(
            suggestion.import_statement,
            r#"import UsersListController from "./users/list_controller""#
        );
    }

    #[test]
    fn test_suggests_absolute_import_verbatim() {
        let def = ControllerDefinition::new(
            "/app/app/javascript/controllers/hello_controller.js",
            "hello",
        );
        let suggestion = suggester().suggest(&def, PathPresentation::Absolute);
        assert_eq!(
            suggestion.import_statement,
            r#"import HelloController from "/app/app/javascript/controllers/hello_controller.js""#
        );
    }

    #[test]
    fn test_suggests_package_import_for_node_modules() {
        let def = ControllerDefinition::new(
            "/app/node_modules/stimulus-clipboard/dist/stimulus-clipboard.js",
            "clipboard",
        );
        let suggestion = suggester().suggest(&def, PathPresentation::Relative);
        assert_eq!(
            suggestion.import_statement,
            r#"import ClipboardController from "stimulus-clipboard""#
        );
    }

    #[test]
    fn test_suggests_scoped_package_import() {
        let def = ControllerDefinition::new(
            "/app/node_modules/@acme/stimulus-widgets/dist/tabs.js",
            "tabs",
        );
        let suggestion = suggester().suggest(&def, PathPresentation::Relative);
        assert_eq!(
            suggestion.import_statement,
            r#"import TabsController from "@acme/stimulus-widgets""#
        );
    }

    #[test]
    fn test_falls_back_to_raw_path_outside_known_roots() {
        let def = ControllerDefinition::new("/elsewhere/extra_controller.js", "extra");
        let suggestion = suggester().suggest(&def, PathPresentation::Relative);
        assert_eq!(
            suggestion.import_statement,
            r#"import ExtraController from "/elsewhere/extra_controller.js""#
        );
    }

    #[test]
    fn test_package_specifier_plain() {
        let path = Utf8Path::new("/app/node_modules/stimulus-use/dist/index.js");
        assert_eq!(package_specifier(path).as_deref(), Some("stimulus-use"));
    }

    #[test]
    fn test_package_specifier_scoped() {
        let path = Utf8Path::new("/app/node_modules/@hotwired/stimulus/dist/stimulus.js");
        assert_eq!(package_specifier(path).as_deref(), Some("@hotwired/stimulus"));
    }

    #[test]
    fn test_package_specifier_absent() {
        assert_eq!(package_specifier(Utf8Path::new("/app/src/index.js")), None);
    }
}
