//! Core operations.
//!
//! This module contains the business logic for resgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod init;

pub use generate::generate;
pub use init::init;
