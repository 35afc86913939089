use std::fmt;

use crate::templates::TemplateKind;

/// Kind of artifact a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Controller,
    Model,
    View,
    Migration,
}

impl ArtifactKind {
    /// All kinds, in the order one invocation processes them.
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Controller,
        ArtifactKind::Model,
        ArtifactKind::View,
        ArtifactKind::Migration,
    ];

    /// Returns the kind identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => "controller",
            ArtifactKind::Model => "model",
            ArtifactKind::View => "view",
            ArtifactKind::Migration => "migration",
        }
    }

    /// Template rendered for this kind. Models are delegated to the host
    /// framework and have none.
    pub fn template(&self) -> Option<TemplateKind> {
        match self {
            ArtifactKind::Controller => Some(TemplateKind::Controller),
            ArtifactKind::Model => None,
            ArtifactKind::View => Some(TemplateKind::View),
            ArtifactKind::Migration => Some(TemplateKind::Migration),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One requested artifact: its kind and the name exactly as the user gave it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    kind: ArtifactKind,
    raw_name: String,
}

impl ArtifactRequest {
    pub fn new(kind: ArtifactKind, raw_name: impl Into<String>) -> Self {
        Self {
            kind,
            raw_name: raw_name.into(),
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }
}
