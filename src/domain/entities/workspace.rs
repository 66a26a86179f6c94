//! Workspace entity
//!
//! The logical shape of `workspace.json` / `angular.json`. Keys this crate
//! does not interpret are kept in `extra` maps so a round trip through the
//! model does not drop anything. Optional keys stay absent when the file
//! left them out, and empty maps stay empty. Ordering is preserved by
//! `IndexMap` and `serde_json`'s `preserve_order`.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A whole workspace file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceDefinition {
    /// File format version; absent means 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    pub projects: IndexMap<String, ProjectDefinition>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// Layout the file was read in, if it could be told from its targets
    #[serde(skip)]
    layout_hint: Option<WorkspaceLayout>,
}

/// Spelling of the target map and target identifier on disk.
///
/// Angular CLI and Nx v1 files use `architect`/`builder`, Nx v2 uses
/// `targets`/`executor`. Both are accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceLayout {
    Architect,
    Targets,
}

impl WorkspaceLayout {
    fn targets_key(self) -> &'static str {
        match self {
            WorkspaceLayout::Architect => "architect",
            WorkspaceLayout::Targets => "targets",
        }
    }

    fn builder_key(self) -> &'static str {
        match self {
            WorkspaceLayout::Architect => "builder",
            WorkspaceLayout::Targets => "executor",
        }
    }
}

impl WorkspaceDefinition {
    /// Empty workspace with the given file version
    pub fn new(version: u32) -> Self {
        Self {
            version: Some(version),
            projects: IndexMap::new(),
            extra: Map::new(),
            layout_hint: None,
        }
    }

    /// Parse workspace JSON, remembering which target spelling it used.
    ///
    /// Projects given as a path string (configured in their own
    /// `project.json`) are rejected.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let doc: Value = serde_json::from_str(content)?;
        if let Some((name, path)) = find_project_reference(&doc) {
            return Err(serde_json::Error::custom(format!(
                "project '{name}' points at '{path}'; projects configured in their own project.json are not supported"
            )));
        }
        let hint = detect_layout(&doc);
        let mut workspace: Self = serde_json::from_value(doc)?;
        workspace.layout_hint = hint;
        Ok(workspace)
    }

    /// Builder-style project insertion, mostly for tests and fixtures
    pub fn with_project(mut self, name: impl Into<String>, project: ProjectDefinition) -> Self {
        self.projects.insert(name.into(), project);
        self
    }

    pub fn project_names(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    pub fn contains_project(&self, name: &str) -> bool {
        self.projects.contains_key(name)
    }

    /// Layout used on write: the one the file was read in, else by version.
    pub fn layout(&self) -> WorkspaceLayout {
        if let Some(layout) = self.layout_hint {
            return layout;
        }
        if self.version.unwrap_or(1) >= 2 {
            WorkspaceLayout::Targets
        } else {
            WorkspaceLayout::Architect
        }
    }

    /// Serialize to a JSON document in this workspace's on-disk layout.
    pub fn to_document(&self) -> serde_json::Result<Value> {
        let mut doc = serde_json::to_value(self)?;
        let layout = self.layout();

        let Some(projects) = doc.get_mut("projects").and_then(Value::as_object_mut) else {
            return Ok(doc);
        };
        for project in projects.values_mut().filter_map(Value::as_object_mut) {
            if let Some(targets) = project.get_mut("targets").and_then(Value::as_object_mut) {
                for target in targets.values_mut().filter_map(Value::as_object_mut) {
                    rename_key(target, "builder", layout.builder_key());
                }
            }
            rename_key(project, "targets", layout.targets_key());
        }

        Ok(doc)
    }
}

fn find_project_reference(doc: &Value) -> Option<(&str, &str)> {
    let projects = doc.get("projects")?.as_object()?;
    projects
        .iter()
        .find_map(|(name, project)| project.as_str().map(|path| (name.as_str(), path)))
}

fn detect_layout(doc: &Value) -> Option<WorkspaceLayout> {
    let projects = doc.get("projects")?.as_object()?;
    projects.values().find_map(|project| {
        if project.get("targets").is_some() {
            Some(WorkspaceLayout::Targets)
        } else if project.get("architect").is_some() {
            Some(WorkspaceLayout::Architect)
        } else {
            None
        }
    })
}

fn rename_key(map: &mut Map<String, Value>, from: &str, to: &str) {
    if from == to {
        return;
    }
    // Rebuild to keep the renamed key in its original position.
    let entries = std::mem::take(map);
    for (key, value) in entries {
        if key == from {
            map.insert(to.to_string(), value);
        } else {
            map.insert(key, value);
        }
    }
}

/// A project inside the workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDefinition {
    pub root: String,

    #[serde(default, alias = "architect", skip_serializing_if = "Option::is_none")]
    pub targets: Option<IndexMap<String, TargetDefinition>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectDefinition {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            targets: None,
            extra: Map::new(),
        }
    }

    pub fn with_target(mut self, name: impl Into<String>, target: TargetDefinition) -> Self {
        self.insert_target(name, target);
        self
    }

    pub fn target(&self, name: &str) -> Option<&TargetDefinition> {
        self.targets.as_ref()?.get(name)
    }

    pub fn has_target(&self, name: &str) -> bool {
        self.target(name).is_some()
    }

    /// Targets in declaration order
    pub fn targets(&self) -> impl Iterator<Item = (&str, &TargetDefinition)> {
        self.targets
            .iter()
            .flatten()
            .map(|(name, target)| (name.as_str(), target))
    }

    /// Insert or replace a target, creating the target map if the project
    /// had none. Returns the replaced definition.
    pub fn insert_target(
        &mut self,
        name: impl Into<String>,
        target: TargetDefinition,
    ) -> Option<TargetDefinition> {
        self.targets
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), target)
    }
}

/// A named operation attached to a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDefinition {
    #[serde(alias = "executor")]
    pub builder: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TargetDefinition {
    pub fn new(builder: impl Into<String>) -> Self {
        Self {
            builder: builder.into(),
            options: None,
            extra: Map::new(),
        }
    }

    /// A version target carrying `syncVersions` in its options
    pub fn version(builder: impl Into<String>, options: VersionTargetOptions) -> Self {
        let mut target = Self::new(builder);
        let mut map = Map::new();
        map.insert(
            "syncVersions".to_string(),
            Value::Bool(options.sync_versions),
        );
        target.options = Some(map);
        target
    }

    /// Read back the version options, if this looks like a version target
    pub fn version_options(&self) -> Option<VersionTargetOptions> {
        self.options
            .as_ref()?
            .get("syncVersions")
            .and_then(Value::as_bool)
            .map(|sync_versions| VersionTargetOptions { sync_versions })
    }
}

/// Options of the `version` target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionTargetOptions {
    pub sync_versions: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_minimal_workspace() {
        let ws: WorkspaceDefinition = serde_json::from_value(json!({
            "version": 1,
            "projects": {
                "a": { "root": "packages/a" },
                "b": { "root": "packages/b" }
            }
        }))
        .unwrap();

        assert_eq!(ws.version, Some(1));
        assert_eq!(ws.project_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(ws.projects["a"].root, "packages/a");
        assert!(ws.projects["b"].targets.is_none());
    }

    #[test]
    fn accepts_architect_and_builder() {
        let ws: WorkspaceDefinition = serde_json::from_value(json!({
            "version": 1,
            "projects": {
                "app": {
                    "root": "apps/app",
                    "projectType": "application",
                    "architect": {
                        "build": { "builder": "@angular-devkit/build-angular:browser" }
                    }
                }
            }
        }))
        .unwrap();

        let app = &ws.projects["app"];
        assert_eq!(
            app.target("build").unwrap().builder,
            "@angular-devkit/build-angular:browser"
        );
        assert_eq!(app.extra["projectType"], json!("application"));
    }

    #[test]
    fn accepts_targets_and_executor() {
        let ws: WorkspaceDefinition = serde_json::from_value(json!({
            "version": 2,
            "projects": {
                "lib": {
                    "root": "libs/lib",
                    "targets": {
                        "test": { "executor": "@nrwl/jest:jest", "options": { "ci": true } }
                    }
                }
            }
        }))
        .unwrap();

        let test = ws.projects["lib"].target("test").unwrap();
        assert_eq!(test.builder, "@nrwl/jest:jest");
        assert_eq!(test.options.as_ref().unwrap()["ci"], json!(true));
        assert_eq!(ws.layout(), WorkspaceLayout::Targets);
    }

    #[test]
    fn missing_projects_is_rejected() {
        let result = serde_json::from_value::<WorkspaceDefinition>(json!({ "version": 1 }));
        assert!(result.is_err());
    }

    #[test]
    fn document_uses_architect_layout_for_v1() {
        let ws = WorkspaceDefinition::new(1).with_project(
            "a",
            ProjectDefinition::new("packages/a").with_target(
                "version",
                TargetDefinition::version("x:version", VersionTargetOptions { sync_versions: false }),
            ),
        );

        let doc = ws.to_document().unwrap();
        let a = &doc["projects"]["a"];
        assert_eq!(a["architect"]["version"]["builder"], json!("x:version"));
        assert_eq!(a["architect"]["version"]["options"]["syncVersions"], json!(false));
        assert!(a.get("targets").is_none());
    }

    #[test]
    fn document_uses_targets_layout_for_v2() {
        let ws = WorkspaceDefinition::new(2).with_project(
            "a",
            ProjectDefinition::new("packages/a")
                .with_target("build", TargetDefinition::new("x:build")),
        );

        let doc = ws.to_document().unwrap();
        assert_eq!(doc["projects"]["a"]["targets"]["build"]["executor"], json!("x:build"));
        assert!(doc["projects"]["a"]["targets"]["build"].get("builder").is_none());
    }

    #[test]
    fn document_preserves_unknown_keys() {
        let ws: WorkspaceDefinition = serde_json::from_value(json!({
            "version": 1,
            "newProjectRoot": "projects",
            "projects": { "a": { "root": "a", "sourceRoot": "a/src" } },
            "defaultProject": "a"
        }))
        .unwrap();

        let doc = ws.to_document().unwrap();
        assert_eq!(doc["newProjectRoot"], json!("projects"));
        assert_eq!(doc["defaultProject"], json!("a"));
        assert_eq!(doc["projects"]["a"]["sourceRoot"], json!("a/src"));
    }

    #[test]
    fn from_json_keeps_the_spelling_it_read() {
        let ws = WorkspaceDefinition::from_json(
            r#"{"version":1,"projects":{"a":{"root":"a","targets":{"build":{"executor":"x:build"}}}}}"#,
        )
        .unwrap();

        assert_eq!(ws.layout(), WorkspaceLayout::Targets);
        let doc = ws.to_document().unwrap();
        assert_eq!(doc["projects"]["a"]["targets"]["build"]["executor"], json!("x:build"));
    }

    #[test]
    fn from_json_without_targets_falls_back_to_version() {
        let ws = WorkspaceDefinition::from_json(r#"{"version":2,"projects":{"a":{"root":"a"}}}"#)
            .unwrap();
        assert_eq!(ws.layout(), WorkspaceLayout::Targets);
    }

    #[test]
    fn version_options_round_trip() {
        let target = TargetDefinition::version("x:version", VersionTargetOptions { sync_versions: true });
        assert_eq!(
            target.version_options(),
            Some(VersionTargetOptions { sync_versions: true })
        );
        assert_eq!(TargetDefinition::new("x:build").version_options(), None);
    }

    #[test]
    fn empty_maps_and_absent_keys_round_trip() {
        let input = json!({
            "projects": {
                "a": {
                    "root": "a",
                    "architect": {
                        "lint": { "builder": "x:lint", "options": {} }
                    }
                },
                "c": { "root": "c", "architect": {} },
                "d": { "root": "d" }
            }
        });
        let ws = WorkspaceDefinition::from_json(&input.to_string()).unwrap();

        assert_eq!(ws.version, None);
        assert_eq!(ws.to_document().unwrap(), input);
    }

    #[test]
    fn insert_target_creates_the_map() {
        let mut project = ProjectDefinition::new("a");
        assert!(!project.has_target("version"));

        let replaced = project.insert_target("version", TargetDefinition::new("x:version"));

        assert!(replaced.is_none());
        assert!(project.has_target("version"));
        assert_eq!(project.targets().map(|(name, _)| name).collect::<Vec<_>>(), vec!["version"]);
    }

    #[test]
    fn project_reference_is_rejected_by_name() {
        let err = WorkspaceDefinition::from_json(
            r#"{"version":2,"projects":{"a":{"root":"libs/a"},"b":"libs/b"}}"#,
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("project 'b' points at 'libs/b'"), "{message}");
    }
}
