//! Init command report.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from writing the default config.
#[derive(Debug)]
pub struct InitReport {
    pub path: PathBuf,
    /// False when a config was already present.
    pub created: bool,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        if self.created {
            out.section("Created");
            out.added_item(&self.path.display().to_string());
        } else {
            out.warning(&format!("{} already exists!", self.path.display()));
        }
    }
}
