//! Environment variable types and decoded values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Declared type of an environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnvType {
    /// Any string.
    Str,
    /// `true`/`false` and common aliases.
    Bool,
    /// A finite number.
    Num,
    /// An email address.
    Email,
    /// A hostname or IP address.
    Host,
    /// A TCP/UDP port between 1 and 65535.
    Port,
    /// An absolute URL.
    Url,
    /// A JSON document.
    Json,
    /// Base64 text decoding to a UTF-8 string.
    Base64String,
    /// Base64 text decoding to a JSON document.
    Base64Json,
}

impl EnvType {
    /// Every supported type, in documentation order.
    pub const ALL: [EnvType; 10] = [
        EnvType::Str,
        EnvType::Bool,
        EnvType::Num,
        EnvType::Email,
        EnvType::Host,
        EnvType::Port,
        EnvType::Url,
        EnvType::Json,
        EnvType::Base64String,
        EnvType::Base64Json,
    ];

    /// Name of the type as written in specification documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Bool => "bool",
            Self::Num => "num",
            Self::Email => "email",
            Self::Host => "host",
            Self::Port => "port",
            Self::Url => "url",
            Self::Json => "json",
            Self::Base64String => "base64String",
            Self::Base64Json => "base64Json",
        }
    }
}

impl fmt::Display for EnvType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvType {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| SetupError::UnknownEnvType {
                name: s.to_string(),
            })
    }
}

/// A validated, decoded environment value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnvValue {
    /// `str`, `email`, `host`, `url` and `base64String` values.
    String(String),
    /// `bool` values.
    Bool(bool),
    /// `num` values.
    Number(f64),
    /// `port` values.
    Port(u16),
    /// `json` and `base64Json` values.
    Json(serde_json::Value),
}

impl EnvValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric view; ports are numbers too.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Port(p) => Some(f64::from(*p)),
            _ => None,
        }
    }

    pub fn as_port(&self) -> Option<u16> {
        match self {
            Self::Port(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::Port(p) => write!(f, "{}", p),
            Self::Json(v) => write!(f, "{}", v),
        }
    }
}
