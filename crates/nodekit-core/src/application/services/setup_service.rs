//! Setup Service - main application orchestrator.
//!
//! This service coordinates the whole setup workflow:
//! 1. Ask the questions and build a `Selection`
//! 2. Check the project manifest (nothing is touched if it is missing)
//! 3. Resolve dependencies and plan artifacts
//! 4. Write the artifacts
//! 5. Install runtime, then development dependencies

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, InstallKind, ManifestReader, PackageInstaller, Prompter},
    domain::{
        Answers, ArtifactPlan, DependencyPlan, DomainValidator as validator, FsEntry, QuestionId,
        Selection, plan, question, resolve,
    },
    error::NodekitResult,
};

/// Knobs that change what `setup` does after planning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupOptions {
    /// Write files but do not run the package manager.
    pub skip_install: bool,
}

/// Outcome of a setup (or a preview of one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupReport {
    pub selection: Selection,
    /// `name` from `package.json`; `None` for previews.
    pub project: Option<String>,
    pub dependencies: DependencyPlan,
    pub artifacts: ArtifactPlan,
    /// Absolute paths of the files written.
    pub written: Vec<PathBuf>,
    /// Package manager invocations performed, in order.
    pub installed: Vec<InstallKind>,
    /// `false` for a preview: nothing was read, written or installed.
    pub applied: bool,
}

/// Main setup service.
pub struct SetupService {
    prompter: Box<dyn Prompter>,
    manifests: Box<dyn ManifestReader>,
    filesystem: Box<dyn Filesystem>,
    installer: Box<dyn PackageInstaller>,
    options: SetupOptions,
}

impl SetupService {
    /// Create a new setup service with the given adapters.
    pub fn new(
        prompter: Box<dyn Prompter>,
        manifests: Box<dyn ManifestReader>,
        filesystem: Box<dyn Filesystem>,
        installer: Box<dyn PackageInstaller>,
    ) -> Self {
        Self {
            prompter,
            manifests,
            filesystem,
            installer,
            options: SetupOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SetupOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> SetupOptions {
        self.options
    }

    /// Ask, validate, then set up the project in `root`.
    pub fn run(&self, root: impl AsRef<Path>) -> NodekitResult<SetupReport> {
        let selection = self.select()?;
        self.setup(&selection, root)
    }

    /// Ask every question in order, shaping each from the answers so far.
    #[instrument(skip(self))]
    pub fn collect_answers(&self) -> NodekitResult<Answers> {
        let mut answers = Answers::new();

        for id in QuestionId::ALL {
            let question = question(id, &answers);
            let answer = self.prompter.ask(&question)?;
            debug!(question = %id, answer = %answer, "Answer received");
            answers.insert(id, answer);
        }

        Ok(answers)
    }

    /// Collect answers and turn them into a validated `Selection`.
    pub fn select(&self) -> NodekitResult<Selection> {
        let answers = self.collect_answers()?;
        let selection = Selection::try_from(&answers)?;
        info!(%selection, "Selection complete");
        Ok(selection)
    }

    /// Set up `root` for an already-validated selection.
    ///
    /// The manifest is checked before anything is written. Files written
    /// before an install failure are left in place.
    #[instrument(
        skip_all,
        fields(selection = %selection, root = %root.as_ref().display())
    )]
    pub fn setup(&self, selection: &Selection, root: impl AsRef<Path>) -> NodekitResult<SetupReport> {
        let root = root.as_ref();

        validator::validate_selection(selection)?;

        let manifest = self.manifests.read(root)?;
        info!(project = manifest.display_name(), "Manifest found");

        let mut report = self.preview(selection)?;

        let declared: Vec<&str> = report
            .dependencies
            .runtime()
            .iter()
            .chain(report.dependencies.development())
            .copied()
            .filter(|package| manifest.declares(package))
            .collect();
        if !declared.is_empty() {
            info!(?declared, "Packages already declared in the manifest");
        }

        report.project = manifest.name;
        report.applied = true;

        report.written = self.apply(&report.artifacts, root)?;
        info!(files = report.written.len(), "Artifacts written");

        if self.options.skip_install {
            info!("Skipping dependency installation");
        } else {
            report.installed = self.install(&report.dependencies, root)?;
        }

        info!("Setup completed successfully");
        Ok(report)
    }

    /// Resolve and plan without touching anything.
    pub fn preview(&self, selection: &Selection) -> NodekitResult<SetupReport> {
        let dependencies = resolve(selection);
        let artifacts = plan(selection);
        validator::validate_artifact_plan(&artifacts)?;

        Ok(SetupReport {
            selection: *selection,
            project: None,
            dependencies,
            artifacts,
            written: Vec::new(),
            installed: Vec::new(),
            applied: false,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn apply(&self, artifacts: &ArtifactPlan, root: &Path) -> NodekitResult<Vec<PathBuf>> {
        let mut written = Vec::new();

        for entry in artifacts.entries() {
            let path = entry.path().under(root);
            match entry {
                FsEntry::Directory(_) => {
                    debug!(path = %path.display(), "Creating directory");
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    if self.filesystem.exists(&path) {
                        warn!(path = %path.display(), "Overwriting existing file");
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                    written.push(path);
                }
            }
        }

        Ok(written)
    }

    fn install(&self, dependencies: &DependencyPlan, root: &Path) -> NodekitResult<Vec<InstallKind>> {
        let mut installed = Vec::new();

        for (kind, packages) in [
            (InstallKind::Runtime, dependencies.runtime()),
            (InstallKind::Development, dependencies.development()),
        ] {
            if packages.is_empty() {
                debug!(%kind, "Nothing to install");
                continue;
            }
            info!(%kind, count = packages.len(), "Installing dependencies");
            self.installer.install(packages, kind, root)?;
            installed.push(kind);
        }

        Ok(installed)
    }
}
