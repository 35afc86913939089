//! Init operation - write a default resgen.toml.

use std::path::Path;

use eyre::{Context, Result};
use resgen_config::{CONFIG_FILE_NAME, DEFAULT_CONFIG};
use resgen_core::{DiskFs, File, Filesystem, WriteResult};

use crate::reports::InitReport;

/// Write the default config into `root`, leaving an existing one untouched.
pub fn init(root: &Path) -> Result<InitReport> {
    DiskFs
        .create_dir_all(root)
        .wrap_err_with(|| format!("Failed to create {}", root.display()))?;

    let file = File::new(root.join(CONFIG_FILE_NAME), DEFAULT_CONFIG);
    let result = file
        .write(&DiskFs)
        .wrap_err_with(|| format!("Failed to write {}", file.path().display()))?;

    Ok(InitReport {
        path: file.path().to_path_buf(),
        created: result == WriteResult::Written,
    })
}
