//! Per-artifact orchestration.
//!
//! Each request runs derive, resolve, existence check, ensure directories,
//! render and write on its own. A failure is recorded on that request's
//! [`Outcome`] and never stops the remaining requests.

use std::path::{Path, PathBuf};

use resgen_core::{DiskFs, File, Filesystem, WriteResult};

use crate::{
    ArtifactKind, ArtifactRequest, Clock, GenerateError, HostHooks, PathResolver, Placeholder,
    Result, Substitutions, SystemClock, TemplateKind, TemplateStore,
    naming::{
        derive_class_name, derive_controller_class_name, derive_migration_names,
        derive_model_class_name, short_class_name, validate_file_name,
    },
};

/// What happened to a successfully handled artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The rendered file was written.
    Written,
    /// Creation was handed to the host framework.
    Delegated,
    /// Dry run: nothing was touched. Carries the rendered content for
    /// templated artifacts.
    Planned { content: Option<String> },
}

/// A successfully handled artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Derived class name, or the view name for views.
    pub name: String,
    pub path: PathBuf,
    pub action: Action,
    /// Non-fatal problems after the artifact itself was produced.
    pub warnings: Vec<String>,
}

impl Generated {
    fn new(name: impl Into<String>, path: PathBuf, action: Action) -> Self {
        Self {
            name: name.into(),
            path,
            action,
            warnings: Vec::new(),
        }
    }
}

/// The result of one [`ArtifactRequest`].
#[derive(Debug)]
pub struct Outcome {
    pub request: ArtifactRequest,
    pub result: Result<Generated>,
}

impl Outcome {
    /// Whether this outcome counts as a failure. Skipping an existing file
    /// does not.
    pub fn is_failure(&self) -> bool {
        match &self.result {
            Ok(_) => false,
            Err(e) => !e.is_already_exists(),
        }
    }
}

/// Turns artifact requests into files on disk.
pub struct Materializer {
    resolver: PathResolver,
    templates: TemplateStore,
    hooks: Box<dyn HostHooks>,
    fs: Box<dyn Filesystem>,
    clock: Box<dyn Clock>,
    dry_run: bool,
}

impl Materializer {
    /// A materializer writing to the local disk with the system clock.
    pub fn new(
        resolver: PathResolver,
        templates: TemplateStore,
        hooks: impl HostHooks + 'static,
    ) -> Self {
        Self {
            resolver,
            templates,
            hooks: Box::new(hooks),
            fs: Box::new(DiskFs),
            clock: Box::new(SystemClock),
            dry_run: false,
        }
    }

    pub fn with_fs(mut self, fs: impl Filesystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Plan only: render and report, but create nothing and run no hooks.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Handle every request in order, one outcome per request.
    pub fn run(&self, requests: &[ArtifactRequest]) -> Vec<Outcome> {
        requests.iter().map(|r| self.materialize(r)).collect()
    }

    /// Handle a single request.
    pub fn materialize(&self, request: &ArtifactRequest) -> Outcome {
        let result = match request.kind() {
            ArtifactKind::Controller => self.controller(request),
            ArtifactKind::Model => self.model(request),
            ArtifactKind::View => self.view(request),
            ArtifactKind::Migration => self.migration(request),
        };
        Outcome {
            request: request.clone(),
            result,
        }
    }

    fn controller(&self, request: &ArtifactRequest) -> Result<Generated> {
        let class_name = derive_controller_class_name(request.raw_name())?;
        let path = self.resolver.controller_path(&class_name);
        self.ensure_vacant(request, &path)?;

        let substitutions = Substitutions::new()
            .with(Placeholder::Namespace, self.resolver.controller_namespace(&class_name))
            .with(Placeholder::Class, short_class_name(&class_name));
        self.write_rendered(request, class_name, path, TemplateKind::Controller, &substitutions)
    }

    fn model(&self, request: &ArtifactRequest) -> Result<Generated> {
        let class_name = derive_model_class_name(request.raw_name())?;
        let path = self.resolver.model_path(&class_name);
        self.ensure_vacant(request, &path)?;

        if self.dry_run {
            return Ok(Generated::new(
                class_name,
                path,
                Action::Planned { content: None },
            ));
        }

        self.hooks.create_model(&class_name)?;
        Ok(Generated::new(class_name, path, Action::Delegated))
    }

    fn view(&self, request: &ArtifactRequest) -> Result<Generated> {
        let raw = request.raw_name();
        validate_file_name(raw, true)?;
        let path = self.resolver.view_path(raw);
        self.ensure_vacant(request, &path)?;

        // Views are named by path; `{{class}}` is only offered when the name has letters.
        let mut substitutions = Substitutions::new();
        if let Ok(class_name) = derive_class_name(raw) {
            substitutions = substitutions.with(Placeholder::Class, short_class_name(&class_name));
        }
        self.write_rendered(request, raw, path, TemplateKind::View, &substitutions)
    }

    fn migration(&self, request: &ArtifactRequest) -> Result<Generated> {
        let raw = request.raw_name();
        validate_file_name(raw, false)?;
        let derived = derive_migration_names(raw)?;
        let path = self.resolver.migration_path(raw, self.clock.now());
        self.ensure_vacant(request, &path)?;

        let mut substitutions =
            Substitutions::new().with(Placeholder::Class, short_class_name(&derived.class_name));
        if let Some(table) = &derived.table_name {
            substitutions = substitutions.with(Placeholder::Table, table.as_str());
        }
        let mut generated = self.write_rendered(
            request,
            derived.class_name,
            path,
            TemplateKind::Migration,
            &substitutions,
        )?;

        if generated.action == Action::Written {
            if let Err(e) = self.hooks.refresh_autoload() {
                generated.warnings.push(format!("autoload refresh failed: {e}"));
            }
        }
        Ok(generated)
    }

    fn ensure_vacant(&self, request: &ArtifactRequest, path: &Path) -> Result<()> {
        if self.fs.exists(path) {
            return Err(already_exists(request, path));
        }
        Ok(())
    }

    fn write_rendered(
        &self,
        request: &ArtifactRequest,
        name: impl Into<String>,
        path: PathBuf,
        kind: TemplateKind,
        substitutions: &Substitutions,
    ) -> Result<Generated> {
        let content = self.templates.render(kind, substitutions);

        if self.dry_run {
            return Ok(Generated::new(
                name,
                path,
                Action::Planned {
                    content: Some(content),
                },
            ));
        }

        if let Some(parent) = path.parent() {
            self.fs
                .create_dir_all(parent)
                .map_err(|source| GenerateError::Filesystem {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let file = File::new(path, content);
        let written = file
            .write(&*self.fs)
            .map_err(|source| GenerateError::Filesystem {
                path: file.path().to_path_buf(),
                source,
            })?;

        match written {
            WriteResult::Written => Ok(Generated::new(
                name,
                file.path().to_path_buf(),
                Action::Written,
            )),
            WriteResult::Skipped => Err(already_exists(request, file.path())),
        }
    }
}

fn already_exists(request: &ArtifactRequest, path: &Path) -> GenerateError {
    GenerateError::AlreadyExists {
        name: request.raw_name().to_string(),
        path: path.to_path_buf(),
    }
}
