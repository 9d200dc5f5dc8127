//! Token substitution for specification documents.
//!
//! Specification documents may reference values that are only known at
//! runtime using `%TOKEN%` markers.
//!
//! # Syntax
//!
//! - `%NAME%` - replaced with the value of `NAME`
//! - `NAME` is one or more of `[A-Za-z0-9_.-]`
//! - unknown tokens and stray `%` characters are left untouched
//!
//! # Example
//!
//! ```yaml
//! config:
//!   baseDir: "%CWD%/runtime"
//! # With CWD=/srv/app, produces: baseDir: "/srv/app/runtime"
//! ```

use std::collections::{BTreeSet, HashMap};

/// Name of the built-in token holding the current working directory.
pub const CWD_TOKEN: &str = "CWD";

/// A segment of a document after tokenisation.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Token reference: %NAME%
    Token(String),
}

fn is_token_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Split a string into literal text and `%TOKEN%` references.
///
/// A `%` that does not open a well-formed token is kept as literal text and
/// scanning resumes right after it, so `50% of %CWD%` still finds `CWD`.
pub fn parse_tokens(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = input;

    while let Some(start) = rest.find('%') {
        literal.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        match after.find('%') {
            Some(end) if is_token_name(&after[..end]) => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Token(after[..end].to_string()));
                rest = &after[end + 1..];
            }
            _ => {
                literal.push('%');
                rest = after;
            }
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}

/// Values available for substitution.
///
/// Tokens are resolved in priority order:
/// 1. Caller-supplied variables (highest priority)
/// 2. Built-in variables (`CWD`)
/// 3. Environment variables, when enabled (lowest priority)
#[derive(Debug, Default, Clone)]
pub struct SubstitutionContext {
    /// Caller-supplied variables
    pub variables: HashMap<String, String>,

    /// Built-in variables
    pub builtins: HashMap<String, String>,

    /// Environment variables
    pub env: HashMap<String, String>,
}

impl SubstitutionContext {
    /// Create a new context with the `CWD` built-in set to the current directory.
    pub fn new() -> Self {
        let mut builtins = HashMap::new();
        if let Ok(cwd) = std::env::current_dir() {
            builtins.insert(CWD_TOKEN.to_string(), cwd.display().to_string());
        }

        Self {
            builtins,
            ..Default::default()
        }
    }

    /// Set a caller-supplied variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Use the given map as the environment fallback.
    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// Use the process environment as the fallback. Non-UTF-8 entries are skipped.
    pub fn with_process_env(self) -> Self {
        let env = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        self.with_env(env)
    }

    /// Resolve a token name to its value.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.variables
            .get(name)
            .or_else(|| self.builtins.get(name))
            .or_else(|| self.env.get(name))
            .map(String::as_str)
    }

    /// Names of tokens in `input` that this context cannot resolve, sorted
    /// and without duplicates.
    pub fn unresolved_tokens(&self, input: &str) -> Vec<String> {
        parse_tokens(input)
            .into_iter()
            .filter_map(|seg| match seg {
                Segment::Token(name) if self.resolve(&name).is_none() => Some(name),
                _ => None,
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Replace every resolvable `%TOKEN%` in `input`.
///
/// Unresolved tokens are written back unchanged. Replacement values are not
/// rescanned.
pub fn substitute(input: &str, context: &SubstitutionContext) -> String {
    let mut result = String::with_capacity(input.len());

    for segment in parse_tokens(input) {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Token(name) => match context.resolve(&name) {
                Some(value) => result.push_str(value),
                None => {
                    result.push('%');
                    result.push_str(&name);
                    result.push('%');
                }
            },
        }
    }

    result
}
