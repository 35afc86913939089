//! Generate command report data structures.

use std::path::{Path, PathBuf};

use resgen_codegen::{Action, GenerateError, Generated, Outcome};

use super::output::{Output, Report};

/// Report data from one generate invocation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Project root, used to shorten displayed paths.
    pub root: PathBuf,
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// One outcome per requested artifact, in processing order.
    pub outcomes: Vec<Outcome>,
}

impl GenerateReport {
    /// Whether any artifact failed. Existing targets are skips, not failures.
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(Outcome::is_failure)
    }

    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn render_generated(&self, out: &mut dyn Output, kind: &str, generated: &Generated) {
        let path = self.display_path(&generated.path);
        match &generated.action {
            Action::Written => {
                out.added_item(&format!("{kind} {} ({path})", generated.name));
            }
            Action::Delegated => {
                out.added_item(&format!("{kind} {} (via make_model hook)", generated.name));
            }
            Action::Planned { content } => {
                out.list_item(&format!("{kind} {} ({path})", generated.name));
                if let Some(content) = content {
                    out.divider(&path);
                    out.preformatted(content.trim_end());
                    out.newline();
                }
            }
        }
        for warning in &generated.warnings {
            out.warning(&format!("{kind} {}: {warning}", generated.name));
        }
    }

    fn render_error(&self, out: &mut dyn Output, kind: &str, error: &GenerateError) {
        if error.is_already_exists() {
            out.warning(&format!("{kind} {error}"));
        } else {
            out.error(&format!("{kind}: {error}"));
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            out.section("Would generate");
        } else {
            out.section("Generated");
        }

        for outcome in &self.outcomes {
            let kind = outcome.request.kind().as_str();
            match &outcome.result {
                Ok(generated) => self.render_generated(out, kind, generated),
                Err(error) => self.render_error(out, kind, error),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use resgen_codegen::{ArtifactKind, ArtifactRequest};

    use super::*;
    use crate::reports::output::RecordingOutput;

    fn outcome(kind: ArtifactKind, raw: &str, result: resgen_codegen::Result<Generated>) -> Outcome {
        Outcome {
            request: ArtifactRequest::new(kind, raw),
            result,
        }
    }

    fn generated(name: &str, path: &str, action: Action) -> Generated {
        Generated {
            name: name.to_string(),
            path: PathBuf::from(path),
            action,
            warnings: Vec::new(),
        }
    }

    fn render(report: &GenerateReport) -> Vec<String> {
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        out.lines
    }

    #[test]
    fn test_render_mixed_outcomes() {
        let mut migration = generated(
            "CreatePostsTable",
            "/site/database/migrations/20240101000000_create_posts_table.php",
            Action::Written,
        );
        migration.warnings.push("autoload refresh failed".to_string());

        let report = GenerateReport {
            root: PathBuf::from("/site"),
            dry_run: false,
            outcomes: vec![
                outcome(
                    ArtifactKind::Controller,
                    "Post",
                    Err(GenerateError::AlreadyExists {
                        name: "Post".to_string(),
                        path: PathBuf::from("/site/app/Http/Controllers/PostController.php"),
                    }),
                ),
                outcome(
                    ArtifactKind::Model,
                    "posts",
                    Ok(generated("Post", "/site/app/Post.php", Action::Delegated)),
                ),
                outcome(
                    ArtifactKind::View,
                    "",
                    Err(GenerateError::InvalidArgument {
                        name: String::new(),
                        reason: "name is empty",
                    }),
                ),
                outcome(ArtifactKind::Migration, "create_posts_table", Ok(migration)),
            ],
        };

        assert!(report.has_failures());
        assert_eq!(
            render(&report),
            [
                "Generated:",
                "warning: controller Post already exists!",
                "+ model Post (via make_model hook)",
                "error: view: invalid name '': name is empty",
                "+ migration CreatePostsTable (database/migrations/20240101000000_create_posts_table.php)",
                "warning: migration CreatePostsTable: autoload refresh failed",
            ]
        );
    }

    #[test]
    fn test_already_exists_is_not_a_failure() {
        let report = GenerateReport {
            root: PathBuf::from("/site"),
            dry_run: false,
            outcomes: vec![outcome(
                ArtifactKind::Controller,
                "Post",
                Err(GenerateError::AlreadyExists {
                    name: "Post".to_string(),
                    path: PathBuf::from("/site/app/Http/Controllers/PostController.php"),
                }),
            )],
        };

        assert!(!report.has_failures());
    }

    #[test]
    fn test_render_dry_run_shows_content() {
        let report = GenerateReport {
            root: PathBuf::from("/site"),
            dry_run: true,
            outcomes: vec![outcome(
                ArtifactKind::View,
                "home",
                Ok(generated(
                    "home",
                    "/site/resources/views/home.blade.php",
                    Action::Planned {
                        content: Some("<h1>Home</h1>\n".to_string()),
                    },
                )),
            )],
        };

        assert_eq!(
            render(&report),
            [
                "Would generate:",
                "- view home (resources/views/home.blade.php)",
                "-- resources/views/home.blade.php --",
                "<h1>Home</h1>",
                "",
            ]
        );
    }
}
