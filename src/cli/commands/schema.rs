//! Schema command implementation.
//!
//! The `setupcheck schema` command prints the embedded JSON Schema used to
//! validate specification documents.

use crate::cli::args::SchemaArgs;
use crate::error::{Result, SetupError};
use crate::spec::{schema_document, schema_yaml};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand {
    args: SchemaArgs,
}

impl SchemaCommand {
    pub fn new(args: SchemaArgs) -> Self {
        Self { args }
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.yaml {
            ui.data(schema_yaml());
        } else {
            let json = serde_json::to_string_pretty(&schema_document()?)
                .map_err(|e| SetupError::Other(e.into()))?;
            ui.data(&format!("{}\n", json));
        }
        Ok(CommandResult::success())
    }
}
