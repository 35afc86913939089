//! Configuration types for resgen.toml

use std::path::PathBuf;

use serde::Deserialize;

/// Root of resgen.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project layout
    #[serde(default)]
    pub project: ProjectConfig,

    /// Template overrides
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// External commands run around generation
    #[serde(default)]
    pub hooks: HooksConfig,
}

/// Where generated artifacts land inside the project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Application source directory, relative to the project root.
    pub app_dir: String,
    /// Application namespace prefix stripped from class names (e.g. `App\`).
    pub namespace: String,
    /// Controller directory, relative to `app_dir`.
    pub controllers_dir: String,
    /// View directory, relative to the project root.
    pub views_dir: String,
    /// Migration directory, relative to the project root.
    pub migrations_dir: String,
    /// Extension of generated class and migration files, without the dot.
    pub source_extension: String,
    /// Extension of generated views, without the dot.
    pub view_extension: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            app_dir: "app".to_string(),
            namespace: "App\\".to_string(),
            controllers_dir: "Http/Controllers".to_string(),
            views_dir: "resources/views".to_string(),
            migrations_dir: "database/migrations".to_string(),
            source_extension: "php".to_string(),
            view_extension: "blade.php".to_string(),
        }
    }
}

impl ProjectConfig {
    /// The application namespace with a single trailing `\`, or empty.
    pub fn namespace_prefix(&self) -> String {
        match self.root_namespace() {
            "" => String::new(),
            ns => format!("{ns}\\"),
        }
    }

    /// The application namespace without its trailing `\` (e.g. `App`).
    pub fn root_namespace(&self) -> &str {
        self.namespace.trim_matches('\\')
    }
}

/// Per-kind template files replacing the built-in ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    pub controller: Option<PathBuf>,
    pub migration: Option<PathBuf>,
    pub view: Option<PathBuf>,
}

/// Commands standing in for the host framework.
///
/// Each command is an argument vector; the first element is the program.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HooksConfig {
    /// Creates a model; the derived class name is appended as the last argument.
    pub make_model: Vec<String>,
    /// Refreshes the autoload cache after a migration is written.
    pub dump_autoload: Vec<String>,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            make_model: vec!["php".into(), "artisan".into(), "make:model".into()],
            dump_autoload: vec!["composer".into(), "dump-autoload".into()],
        }
    }
}
