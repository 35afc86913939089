use std::{io, path::PathBuf};

use thiserror::Error;

use crate::hooks::HookError;

/// Result type for artifact generation.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Why a single artifact was not generated.
///
/// Every variant is local to one artifact; the rest of an invocation
/// carries on regardless.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid name '{name}': {reason}")]
    InvalidArgument { name: String, reason: &'static str },

    #[error("no table name found in migration '{name}', expected create_<table>_table")]
    NoTableNameFound { name: String },

    #[error("{name} already exists!")]
    AlreadyExists { name: String, path: PathBuf },

    #[error("failed to write '{}': {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    HookFailed(#[from] HookError),
}

impl GenerateError {
    /// Whether this is the non-fatal "target already present" skip.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, GenerateError::AlreadyExists { .. })
    }
}
