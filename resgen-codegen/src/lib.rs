//! Name derivation and template materialization for resgen.
//!
//! This crate turns raw user-supplied names into class names, table names
//! and file paths, and writes the rendered templates to disk.
//!
//! # Module Organization
//!
//! - [`naming`] - Class and table name derivation
//! - [`paths`] - Destination paths per artifact kind
//! - [`templates`] - Built-in templates and placeholder substitution
//! - [`materializer`] - Per-artifact orchestration
//! - [`hooks`] - Host framework collaborators
//! - [`clock`] - Time source for migration timestamps

mod artifact;
pub mod clock;
mod error;
pub mod hooks;
pub mod materializer;
pub mod naming;
pub mod paths;
pub mod templates;

pub use artifact::{ArtifactKind, ArtifactRequest};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{GenerateError, Result};
pub use hooks::{CommandHooks, HookError, HostHooks};
pub use materializer::{Action, Generated, Materializer, Outcome};
pub use paths::PathResolver;
pub use templates::{Placeholder, Substitutions, TemplateError, TemplateKind, TemplateStore};
