//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show reports, including a passing summary.
    #[default]
    Normal,
    /// Print a human report only when something failed.
    Quiet,
}

impl OutputMode {
    pub fn from_quiet_flag(quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Whether a passing human report is printed.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_hides_status() {
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());
        assert_eq!(OutputMode::from_quiet_flag(true), OutputMode::Quiet);
    }
}
