//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{OutputMode, Theme, UserInterface};

/// Writes data to stdout, errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: Theme,
    use_color: bool,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode, use_color: bool) -> Self {
        let theme = if use_color { Theme::new() } else { Theme::plain() };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            use_color,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn use_color(&self) -> bool {
        self.use_color
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn data(&mut self, text: &str) {
        self.out.write_all(text.as_bytes()).ok();
        self.out.flush().ok();
    }
}
