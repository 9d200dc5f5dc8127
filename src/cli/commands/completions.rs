//! Shell completions generation.
//!
//! The `setupcheck completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    fn render(&self) -> String {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "setupcheck", &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        ui.data(&self.render());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap_complete::Shell;

    #[test]
    fn generates_bash_completions() {
        let mut ui = MockUI::new();
        CompletionsCommand::new(CompletionsArgs { shell: Shell::Bash })
            .execute(&mut ui)
            .unwrap();
        assert!(ui.data_output().contains("setupcheck"));
        assert!(ui.data_output().contains("complete"));
    }

    #[test]
    fn generates_zsh_completions() {
        let mut ui = MockUI::new();
        CompletionsCommand::new(CompletionsArgs { shell: Shell::Zsh })
            .execute(&mut ui)
            .unwrap();
        assert!(ui.data_output().contains("--no-create"));
    }
}
