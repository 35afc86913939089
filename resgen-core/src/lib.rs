//! Core utilities and types for the resgen scaffolding generator.
//!
//! This crate provides the filesystem seam and the string helpers
//! (casing, singularization) used across the resgen workspace.

mod file;
mod inflect;
mod utils;

// File operations
pub use file::{DiskFs, File, Filesystem, WriteResult};
// String utilities
pub use inflect::singularize;
pub use utils::{split_words, to_pascal_case};
