//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code for a check that found validation errors.
pub const EXIT_VALIDATION_FAILED: i32 = 1;

/// Exit code for a specification that could not be loaded.
pub const EXIT_SPEC_ERROR: i32 = 2;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing output through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command. With no subcommand, runs `check`
    /// with the top-level arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                super::check::CheckCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::Schema(args)) => {
                super::schema::SchemaCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::check::CheckCommand::new(cli.check.clone()).execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(EXIT_SPEC_ERROR);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatches_schema_command() {
        let cli = Cli::try_parse_from(["setupcheck", "schema"]).unwrap();
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new().dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.data_output().contains("\"environment\""));
    }

    #[test]
    fn default_command_is_check() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let cli =
            Cli::try_parse_from(["setupcheck", missing.to_str().unwrap()]).unwrap();
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new().dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_SPEC_ERROR);
        assert!(ui.errors()[0].contains("Specification not found"));
    }
}
