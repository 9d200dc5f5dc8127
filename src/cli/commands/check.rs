//! Check command implementation.
//!
//! The `setupcheck check` command loads a specification, validates the
//! process environment and filesystem against it, and prints a report.

use crate::check::{CheckOutcome, SetupCheck};
use crate::cli::args::CheckArgs;
use crate::env::ProcessEnv;
use crate::error::{Result, SetupError};
use crate::paths::PathCheckOptions;
use crate::report::{
    HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter, SilentReporter,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_SPEC_ERROR, EXIT_VALIDATION_FAILED};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn build_check(&self) -> Result<SetupCheck> {
        let mut check = SetupCheck::from_path(&self.args.spec)?;
        for (name, value) in &self.args.set {
            check = check.set_variable(name, value);
        }
        if self.args.env_tokens {
            check = check.with_env_tokens();
        }
        Ok(check)
    }

    fn path_options(&self) -> PathCheckOptions {
        PathCheckOptions {
            create: !self.args.no_create,
            ..Default::default()
        }
    }

    fn format_outcome(&self, outcome: &CheckOutcome, use_color: bool) -> String {
        let mut output = Vec::new();

        let written = match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format_outcome(outcome, &mut output),
            OutputFormat::Human => {
                HumanFormatter::new(use_color).format_outcome(outcome, &mut output)
            }
        };
        if let Err(e) = written {
            tracing::warn!("Failed to format report: {}", e);
        }

        String::from_utf8(output).unwrap_or_default()
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = match self
            .build_check()
            .and_then(|check| check.run(&ProcessEnv, &mut SilentReporter, &self.path_options()))
        {
            Ok(outcome) => outcome,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_SPEC_ERROR));
            }
        };

        if outcome.is_ok() && self.args.print_env {
            let json = serde_json::to_string_pretty(&outcome.env.values)
                .map_err(|e| SetupError::Other(e.into()))?;
            ui.data(&format!("{}\n", json));
            return Ok(CommandResult::success());
        }

        let quiet_success = outcome.is_ok()
            && self.args.format == OutputFormat::Human
            && !ui.output_mode().shows_status();
        if !quiet_success {
            let report = self.format_outcome(&outcome, ui.use_color());
            ui.data(&report);
        }

        if outcome.is_ok() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(EXIT_VALIDATION_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn args_for(spec: &Path) -> CheckArgs {
        CheckArgs {
            spec: spec.to_path_buf(),
            ..Default::default()
        }
    }

    fn write_spec(temp: &TempDir, content: &str) -> std::path::PathBuf {
        let path = temp.path().join("setup-check.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn passing_check_exits_zero() {
        let temp = TempDir::new().unwrap();
        let spec = write_spec(
            &temp,
            "config:\n  baseDir: \"%ROOT%\"\ndirs:\n  - path: logs\n    ensureExists: true\n",
        );
        let mut args = args_for(&spec);
        args.set = vec![("ROOT".into(), temp.path().display().to_string())];
        let mut ui = MockUI::new();

        let result = CheckCommand::new(args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(temp.path().join("logs").is_dir());
        assert!(ui.data_output().contains("All setup checks passed"));
    }

    #[test]
    fn validation_errors_exit_one() {
        let temp = TempDir::new().unwrap();
        let spec = write_spec(
            &temp,
            "config:\n  baseDir: \"%ROOT%\"\nfiles:\n  - path: missing.txt\n",
        );
        let mut args = args_for(&spec);
        args.set = vec![("ROOT".into(), temp.path().display().to_string())];
        let mut ui = MockUI::new();

        let result = CheckCommand::new(args).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_VALIDATION_FAILED);
        assert!(ui.data_output().contains("ERROR: File '"));
    }

    #[test]
    fn no_create_reports_instead_of_creating() {
        let temp = TempDir::new().unwrap();
        let spec = write_spec(
            &temp,
            "config:\n  baseDir: \"%ROOT%\"\ndirs:\n  - path: logs\n    ensureExists: true\n",
        );
        let mut args = args_for(&spec);
        args.set = vec![("ROOT".into(), temp.path().display().to_string())];
        args.no_create = true;
        let mut ui = MockUI::new();

        let result = CheckCommand::new(args).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_VALIDATION_FAILED);
        assert!(!temp.path().join("logs").exists());
    }

    #[test]
    fn schema_violation_exits_two() {
        let temp = TempDir::new().unwrap();
        let spec = write_spec(&temp, "dirs:\n  - ensureExists: true\n");
        let mut ui = MockUI::new();

        let result = CheckCommand::new(args_for(&spec)).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_SPEC_ERROR);
        assert!(ui.errors()[0].contains("Invalid specification"));
    }

    #[test]
    fn json_format_prints_outcome() {
        let temp = TempDir::new().unwrap();
        let spec = write_spec(&temp, "{}\n");
        let mut args = args_for(&spec);
        args.format = OutputFormat::Json;
        let mut ui = MockUI::new();

        CheckCommand::new(args).execute(&mut ui).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(ui.data_output()).unwrap();
        assert_eq!(parsed["ok"], true);
    }

    #[test]
    fn quiet_success_prints_nothing() {
        let temp = TempDir::new().unwrap();
        let spec = write_spec(&temp, "{}\n");
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        let result = CheckCommand::new(args_for(&spec)).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.data_output().is_empty());
    }
}
