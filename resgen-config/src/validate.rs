//! Validation of parsed configuration values.

use std::path::{Component, Path};

use miette::SourceSpan;

use crate::{Config, Result, error::SourceContext};

/// Validate a parsed config against its source for error reporting.
pub(crate) fn validate_config(config: &Config, source: &SourceContext) -> Result<()> {
    let project = &config.project;

    for (key, value) in [
        ("app_dir", &project.app_dir),
        ("controllers_dir", &project.controllers_dir),
        ("views_dir", &project.views_dir),
        ("migrations_dir", &project.migrations_dir),
    ] {
        validate_relative_dir(source, key, value)?;
    }

    for (key, value) in [
        ("source_extension", &project.source_extension),
        ("view_extension", &project.view_extension),
    ] {
        validate_extension(source, key, value)?;
    }

    validate_namespace(source, &project.namespace)?;

    for (key, path) in [
        ("controller", &config.templates.controller),
        ("migration", &config.templates.migration),
        ("view", &config.templates.view),
    ] {
        if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(error_at(source, key, format!("templates.{key} must not be empty")));
        }
    }

    for (key, command) in [
        ("make_model", &config.hooks.make_model),
        ("dump_autoload", &config.hooks.dump_autoload),
    ] {
        if command.first().is_none_or(|program| program.trim().is_empty()) {
            return Err(error_at(source, key, format!("hooks.{key} must name a program")));
        }
    }

    Ok(())
}

fn validate_relative_dir(source: &SourceContext, key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(error_at(source, key, format!("project.{key} must not be empty")));
    }

    let path = Path::new(value);
    if path.is_absolute() || value.starts_with('/') {
        return Err(error_at(
            source,
            key,
            format!("project.{key} must be relative to the project root"),
        ));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(error_at(
            source,
            key,
            format!("project.{key} must stay inside the project root"),
        ));
    }

    Ok(())
}

fn validate_extension(source: &SourceContext, key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(error_at(source, key, format!("project.{key} must not be empty")));
    }
    if value.starts_with('.') {
        return Err(error_at(
            source,
            key,
            format!("project.{key} is written without the leading dot"),
        ));
    }
    Ok(())
}

fn validate_namespace(source: &SourceContext, value: &str) -> Result<()> {
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_alphanumeric() || *c == '_' || *c == '\\'))
    {
        return Err(error_at(
            source,
            "namespace",
            format!("project.namespace contains '{bad}'; use letters, digits, '_' and '\\'"),
        ));
    }
    Ok(())
}

fn error_at(source: &SourceContext, key: &str, message: String) -> Box<crate::Error> {
    let span = find_key_span(source.src(), key);
    source.validation_error(message, span)
}

/// Find the span of `key` where it is assigned (`key = ...`) in the TOML source.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let assigned = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if assigned {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }
    None
}
