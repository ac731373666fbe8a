//! The editor-facing catalog response.
//!
//! These types serialize to the camelCase JSON payload the editor consumes.
//! Registered and unregistered controllers share one entry shape; the
//! import-suggestion fields are present only on unregistered entries.

use camino::Utf8PathBuf;
use sd_core::{ControllerDefinition, PathPresentation, RegisteredController, SourceLocation};
use serde::{Deserialize, Serialize};

use crate::classify::Classification;
use crate::suggest::{ImportSuggester, ImportSuggestion};

/// Group name for controllers that live in the project's own tree.
pub const PROJECT_GROUP: &str = "project";

/// One controller in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerEntry {
    /// Source file path, rendered as the analyzer reported it.
    pub path: Utf8PathBuf,

    /// Registered identifier for registered entries, guessed identifier for
    /// unregistered ones.
    pub identifier: String,

    /// Declaration location for editor navigation.
    pub position: SourceLocation,

    /// Whether the application registers this controller.
    pub registered: bool,

    /// Ready-to-insert import statement. Unregistered entries only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_statement: Option<String>,

    /// Class name the import statement binds. Unregistered entries only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
}

impl ControllerEntry {
    /// Builds the entry for a registered controller.
    #[must_use]
    pub fn from_registered(controller: RegisteredController) -> Self {
        Self {
            path: controller.path,
            identifier: controller.identifier,
            position: controller.location,
            registered: true,
            import_statement: None,
            local_name: None,
        }
    }

    /// Builds the entry for an unregistered definition and its suggestion.
    #[must_use]
    pub fn from_unregistered(
        definition: ControllerDefinition,
        suggestion: ImportSuggestion,
    ) -> Self {
        Self {
            path: definition.path,
            identifier: definition.guessed_identifier,
            position: definition.location,
            registered: false,
            import_statement: Some(suggestion.import_statement),
            local_name: Some(suggestion.local_name),
        }
    }
}

/// A named list of controllers: the project group or one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerGroup {
    /// [`PROJECT_GROUP`] or the package name.
    pub name: String,

    /// Entries in classification order.
    pub controller_definitions: Vec<ControllerEntry>,
}

/// The unregistered half of the response, split by origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnregisteredControllers {
    /// Unregistered controllers from the project's own tree.
    pub project: ControllerGroup,

    /// One group per package with unregistered controllers.
    pub node_modules: Vec<ControllerGroup>,
}

/// The complete catalog response for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerCatalog {
    /// Controllers the application registers.
    pub registered: ControllerGroup,

    /// Everything discovered but not registered.
    pub unregistered: UnregisteredControllers,
}

impl ControllerCatalog {
    /// Assembles the response from a classification and an import suggester.
    ///
    /// Suggestions are computed here, once per unregistered definition, with
    /// the presentation mode resolved from the project settings.
    #[must_use]
    pub fn from_classification<S>(
        classification: Classification,
        suggester: &S,
        mode: PathPresentation,
    ) -> Self
    where
        S: ImportSuggester + ?Sized,
    {
        let suggest = |definition: ControllerDefinition| {
            let suggestion = suggester.suggest(&definition, mode);
            ControllerEntry::from_unregistered(definition, suggestion)
        };

        let registered = ControllerGroup {
            name: PROJECT_GROUP.to_owned(),
            controller_definitions: classification
                .registered
                .into_iter()
                .map(ControllerEntry::from_registered)
                .collect(),
        };

        let project = ControllerGroup {
            name: PROJECT_GROUP.to_owned(),
            controller_definitions: classification
                .unregistered_project
                .into_iter()
                .map(suggest)
                .collect(),
        };

        let node_modules = classification
            .unregistered_modules
            .into_iter()
            .map(|module| ControllerGroup {
                name: module.name,
                controller_definitions: module
                    .controller_definitions
                    .into_iter()
                    .map(suggest)
                    .collect(),
            })
            .collect();

        Self {
            registered,
            unregistered: UnregisteredControllers {
                project,
                node_modules,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::suggest::ConventionalImportSuggester;
    use camino::Utf8Path;
    use sd_core::DetectedModule;
    use serde_json::json;

    #[test]
    fn test_registered_entry_omits_suggestion_fields() {
        let entry = ControllerEntry::from_registered(
            RegisteredController::new("controllers/hello_controller.js", "hello")
                .with_location(SourceLocation::new(3, 14)),
        );

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({
                "path": "controllers/hello_controller.js",
                "identifier": "hello",
                "position": {"line": 3, "column": 14},
                "registered": true,
            })
        );
    }

    #[test]
    fn test_unregistered_entry_includes_suggestion_fields() {
        let entry = ControllerEntry::from_unregistered(
            ControllerDefinition::new("controllers/users/list_controller.js", "users--list"),
            ImportSuggestion {
                import_statement: r#"import UsersListController from "./users/list_controller""#
                    .to_owned(),
                local_name: "UsersListController".to_owned(),
            },
        );

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({
                "path": "controllers/users/list_controller.js",
                "identifier": "users--list",
                "position": {"line": 1, "column": 1},
                "registered": false,
                "importStatement": "import UsersListController from \"./users/list_controller\"",
                "localName": "UsersListController",
            })
        );
    }

    #[test]
    fn test_entry_deserializes_without_optional_fields() {
        let entry: ControllerEntry = serde_json::from_value(json!({
            "path": "controllers/hello_controller.js",
            "identifier": "hello",
            "position": {"line": 1, "column": 1},
            "registered": true,
        }))
        .unwrap();

        assert!(entry.import_statement.is_none());
        assert!(entry.local_name.is_none());
    }

    #[test]
    fn test_from_classification_wires_suggestions() {
        let suggester = ConventionalImportSuggester::new(Utf8Path::new("/app"));
        let classification = classify(
            vec![RegisteredController::new(
                "/app/app/javascript/controllers/hello_controller.js",
                "hello",
            )],
            vec![ControllerDefinition::new(
                "/app/app/javascript/controllers/users/list_controller.js",
                "users--list",
            )],
            vec![DetectedModule::new("stimulus-clipboard").with_definitions(vec![
                ControllerDefinition::new(
                    "/app/node_modules/stimulus-clipboard/dist/stimulus-clipboard.js",
                    "clipboard",
                ),
            ])],
        );

        let catalog = ControllerCatalog::from_classification(
            classification,
            &suggester,
            PathPresentation::Relative,
        );

        assert_eq!(catalog.registered.name, PROJECT_GROUP);
        assert_eq!(catalog.registered.controller_definitions.len(), 1);
        assert!(catalog.registered.controller_definitions[0].registered);

        let project = &catalog.unregistered.project.controller_definitions;
        assert_eq!(
            project[0].import_statement.as_deref(),
            Some(r#"import UsersListController from "./users/list_controller""#)
        );
        assert_eq!(project[0].local_name.as_deref(), Some("UsersListController"));

        let packages = &catalog.unregistered.node_modules;
        assert_eq!(packages[0].name, "stimulus-clipboard");
        assert_eq!(
            packages[0].controller_definitions[0]
                .import_statement
                .as_deref(),
            Some(r#"import ClipboardController from "stimulus-clipboard""#)
        );
    }

    #[test]
    fn test_catalog_serializes_to_expected_json() {
        let catalog = ControllerCatalog {
            registered: ControllerGroup {
                name: PROJECT_GROUP.to_owned(),
                controller_definitions: vec![ControllerEntry::from_registered(
                    RegisteredController::new(
                        "app/javascript/controllers/hello_controller.js",
                        "hello",
                    )
                    .with_location(SourceLocation::new(3, 14)),
                )],
            },
            unregistered: UnregisteredControllers {
                project: ControllerGroup {
                    name: PROJECT_GROUP.to_owned(),
                    controller_definitions: vec![ControllerEntry::from_unregistered(
                        ControllerDefinition::new(
                            "app/javascript/controllers/users/list_controller.js",
                            "users--list",
                        ),
                        ImportSuggestion {
                            import_statement:
                                r#"import UsersListController from "./users/list_controller""#
                                    .to_owned(),
                            local_name: "UsersListController".to_owned(),
                        },
                    )],
                },
                node_modules: Vec::new(),
            },
        };

        let pretty = serde_json::to_string_pretty(&catalog).expect("catalog serializes");
        insta::assert_snapshot!(pretty, @r#"
        {
          "registered": {
            "name": "project",
            "controllerDefinitions": [
              {
                "path": "app/javascript/controllers/hello_controller.js",
                "identifier": "hello",
                "position": {
                  "line": 3,
                  "column": 14
                },
                "registered": true
              }
            ]
          },
          "unregistered": {
            "project": {
              "name": "project",
              "controllerDefinitions": [
                {
                  "path": "app/javascript/controllers/users/list_controller.js",
                  "identifier": "users--list",
                  "position": {
                    "line": 1,
                    "column": 1
                  },
                  "registered": false,
                  "importStatement": "import UsersListController from \"./users/list_controller\"",
                  "localName": "UsersListController"
                }
              ]
            },
            "nodeModules": []
          }
        }
        "#);
    }

    #[test]
    fn test_catalog_round_trips_through_json() {
        let suggester = ConventionalImportSuggester::new(Utf8Path::new("/app"));
        let classification = classify(
            Vec::new(),
            vec![ControllerDefinition::new(
                "/app/app/javascript/controllers/a_controller.js",
                "a",
            )],
            Vec::new(),
        );
        let catalog = ControllerCatalog::from_classification(
            classification,
            &suggester,
            PathPresentation::Absolute,
        );

        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: ControllerCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog, parsed);
    }
}
