//! Templates and placeholder substitution.
//!
//! Each template kind has a built-in body compiled into the binary. A
//! project can replace any of them with its own file through the
//! `[templates]` section of resgen.toml.

use std::{
    borrow::Cow,
    fmt, io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use resgen_config::TemplatesConfig;
use thiserror::Error;

const CONTROLLER_TEMPLATE: &str = include_str!("../templates/controller.stub");
const MIGRATION_TEMPLATE: &str = include_str!("../templates/migration.stub");
const VIEW_TEMPLATE: &str = include_str!("../templates/view.stub");

/// Artifact kinds that are rendered from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Controller,
    Migration,
    View,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Controller => "controller",
            TemplateKind::Migration => "migration",
            TemplateKind::View => "view",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named token inside a template body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{{class}}`
    Class,
    /// `{{table}}`
    Table,
    /// `{{namespace}}`
    Namespace,
}

impl Placeholder {
    /// The literal token as it appears in template bodies.
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::Class => "{{class}}",
            Placeholder::Table => "{{table}}",
            Placeholder::Namespace => "{{namespace}}",
        }
    }
}

/// Values to substitute for placeholders, applied in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions(IndexMap<Placeholder, String>);

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the value for a placeholder.
    pub fn with(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.0.insert(placeholder, value.into());
        self
    }

    fn iter(&self) -> impl Iterator<Item = (&Placeholder, &String)> {
        self.0.iter()
    }
}

/// A template override that could not be read.
#[derive(Debug, Error)]
#[error("failed to read {kind} template '{}': {source}", path.display())]
pub struct TemplateError {
    pub kind: TemplateKind,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// One template body per kind, loaded once and shared read-only.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    controller: Cow<'static, str>,
    migration: Cow<'static, str>,
    view: Cow<'static, str>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateStore {
    /// The templates compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            controller: Cow::Borrowed(CONTROLLER_TEMPLATE),
            migration: Cow::Borrowed(MIGRATION_TEMPLATE),
            view: Cow::Borrowed(VIEW_TEMPLATE),
        }
    }

    /// Built-in templates with the configured overrides read from disk.
    ///
    /// Override paths are relative to `root`.
    pub fn load(root: &Path, overrides: &TemplatesConfig) -> Result<Self, TemplateError> {
        let mut store = Self::builtin();
        for (kind, path) in [
            (TemplateKind::Controller, &overrides.controller),
            (TemplateKind::Migration, &overrides.migration),
            (TemplateKind::View, &overrides.view),
        ] {
            if let Some(path) = path {
                let path = root.join(path);
                let body = std::fs::read_to_string(&path)
                    .map_err(|source| TemplateError { kind, path, source })?;
                store.set(kind, body);
            }
        }
        Ok(store)
    }

    /// Replace the body of one template kind.
    fn set(&mut self, kind: TemplateKind, body: impl Into<String>) {
        let slot = match kind {
            TemplateKind::Controller => &mut self.controller,
            TemplateKind::Migration => &mut self.migration,
            TemplateKind::View => &mut self.view,
        };
        *slot = Cow::Owned(body.into());
    }

    /// The raw body of a template.
    fn body(&self, kind: TemplateKind) -> &str {
        match kind {
            TemplateKind::Controller => &self.controller,
            TemplateKind::Migration => &self.migration,
            TemplateKind::View => &self.view,
        }
    }

    /// Render a template with the given substitutions.
    ///
    /// Placeholders without a value are left verbatim.
    pub fn render(&self, kind: TemplateKind, substitutions: &Substitutions) -> String {
        substitute(self.body(kind), substitutions)
    }
}

/// Replace every occurrence of each provided placeholder in `body`.
fn substitute(body: &str, substitutions: &Substitutions) -> String {
    let mut rendered = body.to_string();
    for (placeholder, value) in substitutions.iter() {
        rendered = rendered.replace(placeholder.token(), value);
    }
    rendered
}
