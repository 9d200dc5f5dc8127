//! Running a full setup check.
//!
//! [`SetupCheck`] ties the pieces together: it loads a specification,
//! validates the environment, then validates paths, handing each non-empty
//! group of errors to a [`Reporter`] as it goes.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::env::{validate_environment, EnvReport, EnvSource, EnvValue, ProcessEnv};
use crate::error::{Result, SetupError};
use crate::paths::{validate_paths, PathCheckOptions, PathReport, PathRequirements};
use crate::report::{ConsoleReporter, ErrorBatch, Reporter};
use crate::spec::{load_spec_str, read_spec_source, SetupSpec, SubstitutionContext};

/// Combined result of both validation passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub env: EnvReport,
    pub paths: PathReport,
}

impl CheckOutcome {
    pub fn is_ok(&self) -> bool {
        self.env.is_ok() && self.paths.is_ok()
    }

    pub fn error_count(&self) -> usize {
        self.env.error_count() + self.paths.error_count()
    }

    /// Non-empty error batches in the order a check delivers them.
    pub fn batches(&self) -> Vec<ErrorBatch<'_>> {
        [
            ErrorBatch::Environment(&self.env),
            ErrorBatch::Directories(&self.paths.directory_errors),
            ErrorBatch::Files(&self.paths.file_errors),
        ]
        .into_iter()
        .filter(|batch| !batch.is_empty())
        .collect()
    }
}

/// A loaded specification source plus the values used to substitute it.
#[derive(Debug, Clone)]
pub struct SetupCheck {
    path: PathBuf,
    source: String,
    context: SubstitutionContext,
}

impl SetupCheck {
    /// Read the specification at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = read_spec_source(path)?;
        Ok(Self::from_str(source, path))
    }

    /// Use an in-memory specification. `origin` names it in error messages.
    pub fn from_str(source: impl Into<String>, origin: impl AsRef<Path>) -> Self {
        Self {
            path: origin.as_ref().to_path_buf(),
            source: source.into(),
            context: SubstitutionContext::new(),
        }
    }

    /// Register a `%NAME%` substitution value.
    pub fn set_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.set(name, value);
        self
    }

    /// Fall back to process environment variables for unresolved tokens.
    pub fn with_env_tokens(mut self) -> Self {
        self.context = self.context.with_process_env();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn context(&self) -> &SubstitutionContext {
        &self.context
    }

    /// Substitute, parse and schema-check the specification.
    pub fn load(&self) -> Result<SetupSpec> {
        load_spec_str(&self.source, &self.path, &self.context)
    }

    /// Run both validation passes.
    ///
    /// Load failures are returned as `Err` before anything is validated.
    /// Validation errors are delivered to `reporter` and recorded in the
    /// outcome; environment errors do not stop the path pass.
    pub fn run<S: EnvSource + ?Sized>(
        &self,
        env: &S,
        reporter: &mut dyn Reporter,
        options: &PathCheckOptions,
    ) -> Result<CheckOutcome> {
        let spec = self.load()?;
        tracing::debug!(
            "Checking {} variable(s), {} dir(s), {} file(s) from {}",
            spec.environment.len(),
            spec.dirs.len(),
            spec.files.len(),
            self.path.display()
        );

        let env_report = validate_environment(env, &spec.environment);
        if !env_report.is_ok() {
            reporter.report(&ErrorBatch::Environment(&env_report));
        }

        let path_report = validate_paths(&PathRequirements::from_spec(&spec), options);
        if !path_report.directory_errors.is_empty() {
            reporter.report(&ErrorBatch::Directories(&path_report.directory_errors));
        } else if !path_report.file_errors.is_empty() {
            reporter.report(&ErrorBatch::Files(&path_report.file_errors));
        }

        Ok(CheckOutcome {
            env: env_report,
            paths: path_report,
        })
    }

    /// Check against the process environment, printing errors to stderr.
    ///
    /// Returns the decoded environment when everything passes.
    pub fn validate(&self) -> Result<IndexMap<String, EnvValue>> {
        let mut reporter = ConsoleReporter::default();
        let outcome = self.run(&ProcessEnv, &mut reporter, &PathCheckOptions::default())?;

        if outcome.is_ok() {
            Ok(outcome.env.values)
        } else {
            Err(SetupError::ValidationFailed {
                env_errors: outcome.env.error_count(),
                path_errors: outcome.paths.error_count(),
            })
        }
    }
}
