//! Naming conventions for generated artifacts.
//!
//! Raw names come straight from the command line. Class names are
//! PascalCase words, with namespace segments (separated by `\` or `/` in
//! the raw name) joined by `\`.

use std::{
    path::{Component, Path},
    sync::LazyLock,
};

use regex::Regex;
use resgen_core::{singularize, to_pascal_case};

use crate::{GenerateError, Result};

/// Suffix appended to controller class names.
pub const CONTROLLER_SUFFIX: &str = "Controller";

static CREATE_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"create_(.+)_table").expect("create-table pattern is valid"));

/// Names derived from a raw artifact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedName {
    pub class_name: String,
    pub table_name: Option<String>,
}

/// Derive a PascalCase class name from a raw name.
pub fn derive_class_name(raw: &str) -> Result<String> {
    let segments: Vec<String> = raw
        .split(['\\', '/'])
        .map(to_pascal_case)
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        let reason = if raw.trim().is_empty() {
            "name is empty"
        } else {
            "name has no letters or digits"
        };
        return Err(invalid(raw, reason));
    }

    Ok(segments.join("\\"))
}

/// Derive a controller class name, appending [`CONTROLLER_SUFFIX`] when needed.
///
/// The suffix is skipped only when "controller" first occurs past the start
/// of the raw name, so `Controller` itself becomes `ControllerController`.
pub fn derive_controller_class_name(raw: &str) -> Result<String> {
    let class_name = derive_class_name(raw)?;
    let has_suffix = matches!(
        raw.to_ascii_lowercase().find("controller"),
        Some(index) if index > 0
    );

    if has_suffix {
        Ok(class_name)
    } else {
        Ok(format!("{class_name}{CONTROLLER_SUFFIX}"))
    }
}

/// Derive a model class name: the raw name singularized, then PascalCased.
pub fn derive_model_class_name(raw: &str) -> Result<String> {
    derive_class_name(&singularize(raw))
}

/// Extract the table name from a creation-style migration name.
///
/// `create_users_table` yields `users`; anything not matching
/// `create_<table>_table` (case-insensitive) yields `None`.
pub fn derive_table_name(migration_raw: &str) -> Option<String> {
    let lowered = migration_raw.to_lowercase();
    CREATE_TABLE
        .captures(&lowered)
        .map(|captures| captures[1].to_string())
}

/// Derive the class and table names of a migration.
pub fn derive_migration_names(raw: &str) -> Result<DerivedName> {
    let class_name = derive_class_name(raw)?;
    let table_name = derive_table_name(raw).ok_or_else(|| GenerateError::NoTableNameFound {
        name: raw.to_string(),
    })?;

    Ok(DerivedName {
        class_name,
        table_name: Some(table_name),
    })
}

/// The last namespace segment of a class name (`Admin\UserController` -> `UserController`).
pub fn short_class_name(class_name: &str) -> &str {
    class_name.rsplit('\\').next().unwrap_or(class_name)
}

/// Check a raw name that is used verbatim as part of a file name.
///
/// `nested` allows `/`-separated subdirectories (views); otherwise the name
/// must be a single path segment (migrations).
pub fn validate_file_name(raw: &str, nested: bool) -> Result<()> {
    if raw.trim().is_empty() {
        return Err(invalid(raw, "name is empty"));
    }

    let path = Path::new(raw);
    if path.is_absolute() || raw.starts_with(['/', '\\']) {
        return Err(invalid(raw, "name must be relative"));
    }
    if path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::CurDir))
    {
        return Err(invalid(raw, "name must not contain '.' or '..' segments"));
    }
    if !nested && raw.contains(['/', '\\']) {
        return Err(invalid(raw, "name must not contain path separators"));
    }
    if raw.ends_with(['/', '\\']) {
        return Err(invalid(raw, "name must not end with a path separator"));
    }

    Ok(())
}

fn invalid(raw: &str, reason: &'static str) -> GenerateError {
    GenerateError::InvalidArgument {
        name: raw.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name() {
        assert_eq!(derive_class_name("post").unwrap(), "Post");
        assert_eq!(derive_class_name("user_profile").unwrap(), "UserProfile");
        assert_eq!(derive_class_name("user-profile page").unwrap(), "UserProfilePage");
        assert_eq!(derive_class_name("create_posts_table").unwrap(), "CreatePostsTable");
    }

    #[test]
    fn test_class_name_namespaces() {
        assert_eq!(derive_class_name("admin/user").unwrap(), "Admin\\User");
        assert_eq!(derive_class_name("Admin\\user_role").unwrap(), "Admin\\UserRole");
        assert_eq!(derive_class_name("/admin//user/").unwrap(), "Admin\\User");
    }

    #[test]
    fn test_class_name_has_no_whitespace_or_slashes() {
        for raw in ["a b c", "x/y z", " spaced\tout ", "dots.and-dashes", "Ünïcode name"] {
            let name = derive_class_name(raw).unwrap();
            assert!(!name.is_empty(), "{raw}");
            assert!(!name.chars().any(char::is_whitespace), "{name}");
            assert!(!name.contains('/'), "{name}");
        }
    }

    #[test]
    fn test_class_name_idempotent() {
        for raw in ["user_controller", "admin/blog posts", "CreatePostsTable"] {
            let once = derive_class_name(raw).unwrap();
            assert_eq!(derive_class_name(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_class_name_rejects_empty() {
        assert!(matches!(
            derive_class_name(""),
            Err(GenerateError::InvalidArgument { reason: "name is empty", .. })
        ));
        assert!(matches!(
            derive_class_name("__--"),
            Err(GenerateError::InvalidArgument { .. })
        ));
        assert!(derive_class_name("/").is_err());
    }

    #[test]
    fn test_controller_class_name() {
        assert_eq!(derive_controller_class_name("user").unwrap(), "UserController");
        assert_eq!(derive_controller_class_name("post").unwrap(), "PostController");
        assert_eq!(
            derive_controller_class_name("admin/user").unwrap(),
            "Admin\\UserController"
        );
    }

    #[test]
    fn test_controller_suffix_not_duplicated() {
        assert_eq!(
            derive_controller_class_name("UserController").unwrap(),
            "UserController"
        );
        assert_eq!(
            derive_controller_class_name("user_controller").unwrap(),
            "UserController"
        );
    }

    #[test]
    fn test_controller_suffix_position_quirk() {
        // A leading "controller" sits at index 0 and does not count.
        assert_eq!(
            derive_controller_class_name("Controller").unwrap(),
            "ControllerController"
        );
        assert_eq!(
            derive_controller_class_name("controller_admin").unwrap(),
            "ControllerAdminController"
        );
    }

    #[test]
    fn test_model_class_name() {
        assert_eq!(derive_model_class_name("posts").unwrap(), "Post");
        assert_eq!(derive_model_class_name("Post").unwrap(), "Post");
        assert_eq!(derive_model_class_name("categories").unwrap(), "Category");
        assert_eq!(derive_model_class_name("blog_posts").unwrap(), "BlogPost");
        assert_eq!(derive_model_class_name("people").unwrap(), "Person");
        assert_eq!(derive_model_class_name("news").unwrap(), "News");
        assert_eq!(derive_model_class_name("Bus").unwrap(), "Bus");
        assert_eq!(derive_model_class_name("aliases").unwrap(), "Alias");
        assert_eq!(derive_model_class_name("user_aliases").unwrap(), "UserAlias");
        assert!(derive_model_class_name("").is_err());
    }

    #[test]
    fn test_table_name() {
        assert_eq!(derive_table_name("create_users_table").as_deref(), Some("users"));
        assert_eq!(derive_table_name("add_users_column"), None);
        assert_eq!(
            derive_table_name("Create_Blog_Posts_Table").as_deref(),
            Some("blog_posts")
        );
        assert_eq!(derive_table_name("create__table"), None);
    }

    #[test]
    fn test_migration_names() {
        let derived = derive_migration_names("create_posts_table").unwrap();
        assert_eq!(derived.class_name, "CreatePostsTable");
        assert_eq!(derived.table_name.as_deref(), Some("posts"));

        assert!(matches!(
            derive_migration_names("add_votes_to_users"),
            Err(GenerateError::NoTableNameFound { .. })
        ));
        assert!(matches!(
            derive_migration_names(""),
            Err(GenerateError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_short_class_name() {
        assert_eq!(short_class_name("Admin\\UserController"), "UserController");
        assert_eq!(short_class_name("Post"), "Post");
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("welcome", false).is_ok());
        assert!(validate_file_name("posts/index", true).is_ok());
        assert!(validate_file_name("posts/index", false).is_err());
        assert!(validate_file_name("", true).is_err());
        assert!(validate_file_name("   ", true).is_err());
        assert!(validate_file_name("/etc/passwd", true).is_err());
        assert!(validate_file_name("../outside", true).is_err());
        assert!(validate_file_name("posts/", true).is_err());
    }
}
