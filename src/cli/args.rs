//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::report::OutputFormat;
use crate::spec::DEFAULT_SPEC_FILE;

/// setupcheck - Validate environment variables, files and directories
/// against a declarative specification.
#[derive(Debug, Parser)]
#[command(name = "setupcheck")]
#[command(author, version, long_about = None)]
#[command(
    about = "Validate environment variables, files and directories against a declarative specification"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the default `check` command
    #[command(flatten)]
    pub check: CheckArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the environment and filesystem (default if no command specified)
    Check(CheckArgs),

    /// Print the JSON Schema for specification documents
    Schema(SchemaArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Path to the specification document
    #[arg(env = "SETUPCHECK_SPEC", default_value = DEFAULT_SPEC_FILE)]
    pub spec: PathBuf,

    /// Substitute %NAME% in the document with VALUE
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Resolve unknown %NAME% tokens from environment variables
    #[arg(long)]
    pub env_tokens: bool,

    /// Report missing ensureExists entries instead of creating them
    #[arg(long)]
    pub no_create: bool,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Print the validated environment as JSON on success
    #[arg(long)]
    pub print_env: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            spec: PathBuf::from(DEFAULT_SPEC_FILE),
            set: Vec::new(),
            env_tokens: false,
            no_create: false,
            format: OutputFormat::Human,
            print_env: false,
        }
    }
}

/// Arguments for the `schema` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SchemaArgs {
    /// Print the schema as YAML instead of JSON
    #[arg(long)]
    pub yaml: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}
