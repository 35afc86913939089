use std::path::PathBuf;

use clap::{ArgGroup, Args};
use eyre::Result;
use resgen_codegen::{ArtifactKind, ArtifactRequest};
use resgen_config::Config;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
#[command(group(
    ArgGroup::new("artifacts")
        .required(true)
        .multiple(true)
        .args(["controller", "model", "view", "migration"])
))]
pub struct GenerateCommand {
    /// Controller name; "Controller" is appended when missing
    #[arg(long, value_name = "NAME")]
    pub controller: Option<String>,

    /// Model name, singularized (e.g. posts -> Post)
    #[arg(long, value_name = "NAME")]
    pub model: Option<String>,

    /// View name, used as the file path under the views directory
    #[arg(long, value_name = "NAME")]
    pub view: Option<String>,

    /// Migration name in the form create_<table>_table
    #[arg(long, value_name = "NAME")]
    pub migration: Option<String>,

    /// Project root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Path to resgen.toml (defaults to <root>/resgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::load(&self.root, self.config.as_deref()).unwrap_or_exit();

        let report = ops::generate(ops::generate::GenerateOptions {
            root: &self.root,
            config: &config,
            requests: self.requests(),
            dry_run: self.dry_run,
        })?;

        report.render(&mut TerminalOutput::new());
        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }

    /// One request per provided flag, in processing order.
    fn requests(&self) -> Vec<ArtifactRequest> {
        ArtifactKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let raw = match kind {
                    ArtifactKind::Controller => &self.controller,
                    ArtifactKind::Model => &self.model,
                    ArtifactKind::View => &self.view,
                    ArtifactKind::Migration => &self.migration,
                };
                raw.as_ref().map(|raw| ArtifactRequest::new(kind, raw.as_str()))
            })
            .collect()
    }
}
