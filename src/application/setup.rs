//! Version setup use case
//!
//! Resolve → select → plan → apply → persist. Every step before `persist`
//! is free of side effects, so a failure there leaves the workspace alone.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::entities::{EditSet, WorkspaceDefinition};
use crate::domain::ports::{
    FileSystem, MetadataOutcome, ProjectMetadataStore, ProjectPrompt, WorkspaceWriter,
};
use crate::domain::services::{
    select_from_list, select_interactive, MutationPlanner, WorkspaceResolver,
};
use crate::domain::value_objects::{Selection, VersioningMode, VersioningRequest};
use crate::error::WsverResult;
use crate::infrastructure::{JsonWorkspaceWriter, LocalFs, NxJsonMetadataStore};

/// Options for a setup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOptions {
    pub request: VersioningRequest,
    /// Plan and report only
    pub dry_run: bool,
}

impl SetupOptions {
    pub fn new(request: VersioningRequest) -> Self {
        Self {
            request,
            dry_run: false,
        }
    }

    /// Options from the `{ syncVersions, projects }` schema
    pub fn from_schema(sync_versions: bool, projects: &[String]) -> Self {
        Self::new(VersioningRequest::from_schema(sync_versions, projects))
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// What a setup run did
#[derive(Debug, Clone, PartialEq)]
pub struct SetupReport {
    /// Workspace file that was resolved (and written unless dry run)
    pub workspace_path: PathBuf,
    pub mode: VersioningMode,
    pub edits: EditSet,
    /// The workspace after applying `edits`
    pub workspace: WorkspaceDefinition,
    /// Existing projects/targets that the edits replaced
    pub replaced: Vec<String>,
    /// Metadata registrations, empty on dry run
    pub metadata: Vec<(String, MetadataOutcome)>,
    pub persisted: bool,
}

/// Setup use case, parameterized by its ports
pub struct VersionSetup<FS, P, W, M>
where
    FS: FileSystem,
    P: ProjectPrompt,
    W: WorkspaceWriter,
    M: ProjectMetadataStore,
{
    resolver: WorkspaceResolver<FS>,
    prompt: P,
    writer: W,
    metadata: M,
    planner: MutationPlanner,
}

/// Setup wired to the local disk
pub type LocalVersionSetup<P> =
    VersionSetup<LocalFs, P, JsonWorkspaceWriter<LocalFs>, NxJsonMetadataStore<LocalFs>>;

impl<P: ProjectPrompt> LocalVersionSetup<P> {
    pub fn local(prompt: P, planner: MutationPlanner) -> Self {
        let fs = LocalFs::new();
        VersionSetup::new(
            WorkspaceResolver::new(fs),
            prompt,
            JsonWorkspaceWriter::new(fs),
            NxJsonMetadataStore::new(fs),
        )
        .with_planner(planner)
    }
}

impl<FS, P, W, M> VersionSetup<FS, P, W, M>
where
    FS: FileSystem,
    P: ProjectPrompt,
    W: WorkspaceWriter,
    M: ProjectMetadataStore,
{
    pub fn new(resolver: WorkspaceResolver<FS>, prompt: P, writer: W, metadata: M) -> Self {
        Self {
            resolver,
            prompt,
            writer,
            metadata,
            planner: MutationPlanner::default(),
        }
    }

    pub fn with_planner(mut self, planner: MutationPlanner) -> Self {
        self.planner = planner;
        self
    }

    /// Run the setup against the workspace under `root`
    pub fn run(&self, root: &Path, options: &SetupOptions) -> WsverResult<SetupReport> {
        // Step 1: Resolve
        let resolved = self.resolver.resolve(root)?;

        // Step 2: Select
        let mode = self.select(&resolved.definition, &options.request)?;

        // Step 3: Plan
        let edits = self.planner.plan(&resolved.definition, &mode)?;

        // Step 4: Apply in memory
        let mut workspace = resolved.definition;
        let replaced = edits.apply(&mut workspace);
        for label in &replaced {
            warn!("replacing existing {}", label);
        }

        let mut report = SetupReport {
            workspace_path: resolved.path,
            mode,
            edits,
            workspace,
            replaced,
            metadata: Vec::new(),
            persisted: false,
        };

        if options.dry_run {
            info!(edits = report.edits.len(), "dry run, nothing written");
            return Ok(report);
        }

        // Step 5: Persist
        self.writer
            .persist(&report.workspace_path, &report.workspace, &report.edits)?;
        for (project, tags) in report.edits.metadata_entries() {
            let outcome = self.metadata.register(root, project, tags)?;
            report.metadata.push((project.to_string(), outcome));
        }
        report.persisted = true;

        Ok(report)
    }

    fn select(
        &self,
        workspace: &WorkspaceDefinition,
        request: &VersioningRequest,
    ) -> WsverResult<VersioningMode> {
        Ok(match request {
            VersioningRequest::Synchronized => VersioningMode::Synchronized,
            VersioningRequest::Independent(Selection::Declarative(names)) => {
                VersioningMode::Independent(select_from_list(workspace, names)?)
            }
            VersioningRequest::Independent(Selection::Interactive) => {
                VersioningMode::Independent(select_interactive(workspace, &self.prompt)?)
            }
        })
    }
}
