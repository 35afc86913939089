//! Configuration for the resgen scaffolding generator.
//!
//! A project may carry a `resgen.toml` next to its sources. Every key is
//! optional; a project without the file gets [`Config::default`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod parse;
mod validate;

pub use config::{Config, HooksConfig, ProjectConfig, TemplatesConfig};
pub use error::{Error, Result};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "resgen.toml";

/// Contents written by `resgen init`; parses to [`Config::default`].
pub const DEFAULT_CONFIG: &str = include_str!("default.toml");
