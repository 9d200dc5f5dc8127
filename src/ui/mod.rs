//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested without a terminal
//! - [`TerminalUI`] writing to stdout/stderr
//! - [`MockUI`] capturing output for assertions
//!
//! # Example
//!
//! ```
//! use setupcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.data("{}\n");
//! ui.error("Specification not found");
//! assert_eq!(ui.data_output(), "{}\n");
//! assert_eq!(ui.errors(), ["Specification not found"]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Output sink for commands.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Whether styled output should be produced.
    fn use_color(&self) -> bool;

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Write requested output (reports, schemas, scripts) to stdout verbatim.
    /// Shown in every mode.
    fn data(&mut self, text: &str);
}
