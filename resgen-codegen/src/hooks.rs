//! Collaborators owned by the host framework.
//!
//! Models are created by the framework's own generator, and a fresh
//! migration needs the class autoloader rebuilt. Both are reached through
//! [`HostHooks`]; [`CommandHooks`] runs the external commands configured
//! under `[hooks]`.

use std::{
    io,
    path::PathBuf,
    process::{Command, ExitStatus},
    rc::Rc,
};

use resgen_config::HooksConfig;
use thiserror::Error;

/// The host framework operations the generator depends on.
pub trait HostHooks {
    /// Create a model class through the framework's generator.
    fn create_model(&self, class_name: &str) -> Result<(), HookError>;

    /// Regenerate the class autoload cache.
    fn refresh_autoload(&self) -> Result<(), HookError>;
}

impl<H: HostHooks + ?Sized> HostHooks for Rc<H> {
    fn create_model(&self, class_name: &str) -> Result<(), HookError> {
        (**self).create_model(class_name)
    }

    fn refresh_autoload(&self) -> Result<(), HookError> {
        (**self).refresh_autoload()
    }
}

#[derive(Debug, Error)]
pub enum HookError {
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("'{command}' exited unsuccessfully ({status})")]
    Status { command: String, status: ExitStatus },

    #[error("no command configured for hooks.{hook}")]
    NotConfigured { hook: &'static str },
}

/// Runs the configured hook commands from the project root.
#[derive(Debug, Clone)]
pub struct CommandHooks {
    working_dir: PathBuf,
    make_model: Vec<String>,
    dump_autoload: Vec<String>,
}

impl CommandHooks {
    pub fn new(working_dir: impl Into<PathBuf>, hooks: &HooksConfig) -> Self {
        Self {
            working_dir: working_dir.into(),
            make_model: hooks.make_model.clone(),
            dump_autoload: hooks.dump_autoload.clone(),
        }
    }

    fn run(&self, hook: &'static str, argv: &[String], extra: Option<&str>) -> Result<(), HookError> {
        let (program, args) = argv.split_first().ok_or(HookError::NotConfigured { hook })?;

        let mut command = Command::new(program);
        command.args(args).current_dir(&self.working_dir);
        if let Some(extra) = extra {
            command.arg(extra);
        }

        let display = display_command(argv, extra);
        let status = command.status().map_err(|source| HookError::Spawn {
            command: display.clone(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(HookError::Status {
                command: display,
                status,
            })
        }
    }
}

impl HostHooks for CommandHooks {
    fn create_model(&self, class_name: &str) -> Result<(), HookError> {
        self.run("make_model", &self.make_model, Some(class_name))
    }

    fn refresh_autoload(&self) -> Result<(), HookError> {
        self.run("dump_autoload", &self.dump_autoload, None)
    }
}

fn display_command(argv: &[String], extra: Option<&str>) -> String {
    argv.iter()
        .map(String::as_str)
        .chain(extra)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn hooks(dir: &TempDir, make_model: &[&str], dump_autoload: &[&str]) -> CommandHooks {
        let config = HooksConfig {
            make_model: make_model.iter().map(|s| s.to_string()).collect(),
            dump_autoload: dump_autoload.iter().map(|s| s.to_string()).collect(),
        };
        CommandHooks::new(dir.path(), &config)
    }

    #[test]
    fn test_display_command() {
        let argv = vec!["php".to_string(), "artisan".to_string(), "make:model".to_string()];
        assert_eq!(display_command(&argv, Some("Post")), "php artisan make:model Post");
        assert_eq!(display_command(&argv[..1], None), "php");
    }

    #[test]
    fn test_unconfigured_hook() {
        let temp = TempDir::new().unwrap();
        let hooks = hooks(&temp, &[], &[]);

        assert!(matches!(
            hooks.refresh_autoload(),
            Err(HookError::NotConfigured { hook: "dump_autoload" })
        ));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let temp = TempDir::new().unwrap();
        let hooks = hooks(&temp, &["resgen-test-no-such-program"], &[]);

        match hooks.create_model("Post") {
            Err(HookError::Spawn { command, .. }) => {
                assert_eq!(command, "resgen-test-no-such-program Post");
            }
            other => panic!("expected spawn error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status() {
        let temp = TempDir::new().unwrap();
        let hooks = hooks(&temp, &["true"], &["false"]);

        assert!(hooks.create_model("Post").is_ok());
        assert!(matches!(
            hooks.refresh_autoload(),
            Err(HookError::Status { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_working_dir_with_class_name() {
        let temp = TempDir::new().unwrap();
        let hooks = hooks(&temp, &["touch"], &[]);

        hooks.create_model("Post").unwrap();

        assert!(temp.path().join("Post").is_file());
    }
}
