//! Generate operation - materialize the requested artifacts.

use std::path::Path;

use eyre::{Context, Result};
use resgen_codegen::{ArtifactRequest, CommandHooks, Materializer, PathResolver, TemplateStore};
use resgen_config::Config;

use crate::reports::GenerateReport;

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Project root every artifact is written under.
    pub root: &'a Path,
    /// Loaded project configuration.
    pub config: &'a Config,
    /// Requested artifacts, in processing order.
    pub requests: Vec<ArtifactRequest>,
    /// Whether to preview without writing.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Each request is handled on its own; per-artifact failures end up in the
/// report. Only a broken template override aborts the whole run.
pub fn generate(opts: GenerateOptions) -> Result<GenerateReport> {
    let templates =
        TemplateStore::load(opts.root, &opts.config.templates).wrap_err("Failed to load templates")?;
    let resolver = PathResolver::new(opts.root, opts.config.project.clone());
    let hooks = CommandHooks::new(opts.root, &opts.config.hooks);

    let materializer = Materializer::new(resolver, templates, hooks).dry_run(opts.dry_run);
    let outcomes = materializer.run(&opts.requests);

    Ok(GenerateReport {
        root: opts.root.to_path_buf(),
        dry_run: opts.dry_run,
        outcomes,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use resgen_codegen::ArtifactKind;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_generate_controller_and_view() {
        let temp = TempDir::new().unwrap();
        let config = Config::default();

        let report = generate(GenerateOptions {
            root: temp.path(),
            config: &config,
            requests: vec![
                ArtifactRequest::new(ArtifactKind::Controller, "Post"),
                ArtifactRequest::new(ArtifactKind::View, "posts/index"),
            ],
            dry_run: false,
        })
        .unwrap();

        assert!(!report.has_failures());
        assert!(
            temp.path()
                .join("app/Http/Controllers/PostController.php")
                .is_file()
        );
        assert!(
            temp.path()
                .join("resources/views/posts/index.blade.php")
                .is_file()
        );
    }

    #[test]
    fn test_generate_reports_failures() {
        let temp = TempDir::new().unwrap();
        let config = Config::default();

        let report = generate(GenerateOptions {
            root: temp.path(),
            config: &config,
            requests: vec![ArtifactRequest::new(ArtifactKind::Migration, "add_votes")],
            dry_run: false,
        })
        .unwrap();

        assert!(report.has_failures());
    }

    #[test]
    fn test_missing_template_override_aborts() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.templates.view = Some(PathBuf::from("stubs/view.stub"));

        let result = generate(GenerateOptions {
            root: temp.path(),
            config: &config,
            requests: vec![ArtifactRequest::new(ArtifactKind::View, "home")],
            dry_run: false,
        });

        assert!(result.is_err());
        assert!(!temp.path().join("resources").exists());
    }
}
