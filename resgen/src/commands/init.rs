use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Project root to write resgen.toml into
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::init(&self.root)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
