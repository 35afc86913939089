//! Destination paths for generated artifacts.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use resgen_config::ProjectConfig;

/// `strftime` format of the migration file name prefix (UTC).
pub const MIGRATION_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Maps derived names to file paths under a project root.
///
/// Pure path computation; nothing here touches the filesystem.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
    project: ProjectConfig,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>, project: ProjectConfig) -> Self {
        Self {
            root: root.into(),
            project,
        }
    }

    /// `<root>/<app_dir>/<controllers_dir>/<class path>.<ext>`
    pub fn controller_path(&self, class_name: &str) -> PathBuf {
        self.root
            .join(&self.project.app_dir)
            .join(&self.project.controllers_dir)
            .join(self.class_path(class_name))
    }

    /// `<root>/<app_dir>/<class path>.<ext>`
    pub fn model_path(&self, class_name: &str) -> PathBuf {
        self.root
            .join(&self.project.app_dir)
            .join(self.class_path(class_name))
    }

    /// `<root>/<views_dir>/<raw>.<view_ext>`; the raw name is used as-is.
    pub fn view_path(&self, raw_name: &str) -> PathBuf {
        self.root
            .join(&self.project.views_dir)
            .join(format!("{raw_name}.{}", self.project.view_extension))
    }

    /// `<root>/<migrations_dir>/<YYYYMMDDHHMMSS>_<raw>.<ext>`
    pub fn migration_path(&self, raw_name: &str, timestamp: DateTime<Utc>) -> PathBuf {
        let file_name = format!(
            "{}_{raw_name}.{}",
            timestamp.format(MIGRATION_TIMESTAMP_FORMAT),
            self.project.source_extension
        );
        self.root.join(&self.project.migrations_dir).join(file_name)
    }

    /// Namespace declared by a generated controller.
    ///
    /// The application namespace, then the controllers directory, then any
    /// sub-namespace of the class itself: `Admin\UserController` lands in
    /// `App\Http\Controllers\Admin`.
    pub fn controller_namespace(&self, class_name: &str) -> String {
        let relative = self.strip_namespace(class_name);
        let mut segments: Vec<&str> = Vec::new();
        segments.extend(
            self.project
                .root_namespace()
                .split('\\')
                .filter(|s| !s.is_empty()),
        );
        segments.extend(
            self.project
                .controllers_dir
                .split(['/', '\\'])
                .filter(|s| !s.is_empty()),
        );
        if let Some((parent, _)) = relative.rsplit_once('\\') {
            segments.extend(parent.split('\\').filter(|s| !s.is_empty()));
        }
        segments.join("\\")
    }

    /// Class name relative to the application namespace, as a file path.
    fn class_path(&self, class_name: &str) -> PathBuf {
        let relative = self.strip_namespace(class_name);
        let mut segments: Vec<&str> = relative.split('\\').filter(|s| !s.is_empty()).collect();
        let file_name = segments
            .pop()
            .map(|last| format!("{last}.{}", self.project.source_extension))
            .unwrap_or_default();

        let mut path: PathBuf = segments.into_iter().collect();
        path.push(file_name);
        path
    }

    fn strip_namespace<'a>(&self, class_name: &'a str) -> &'a str {
        let prefix = self.project.namespace_prefix();
        if prefix.is_empty() {
            return class_name;
        }
        class_name.strip_prefix(prefix.as_str()).unwrap_or(class_name)
    }
}
