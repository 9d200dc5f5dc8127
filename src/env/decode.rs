//! Per-type decoding of raw environment values.
//!
//! Every decoder either yields an [`EnvValue`] or the exact error message
//! recorded for the variable.

use std::net::IpAddr;
use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use regex::Regex;

use super::types::{EnvType, EnvValue};

/// Loose email shape: something@something.something, no whitespace.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("EMAIL_REGEX must compile")
});

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Decode `raw` as `env_type`.
pub fn decode(env_type: EnvType, raw: &str) -> Result<EnvValue, String> {
    match env_type {
        EnvType::Str => Ok(EnvValue::String(raw.to_string())),
        EnvType::Bool => decode_bool(raw)
            .map(EnvValue::Bool)
            .ok_or_else(|| invalid(env_type, raw)),
        EnvType::Num => decode_number(raw)
            .map(EnvValue::Number)
            .ok_or_else(|| invalid(env_type, raw)),
        EnvType::Email => {
            if EMAIL_REGEX.is_match(raw) {
                Ok(EnvValue::String(raw.to_string()))
            } else {
                Err(invalid(env_type, raw))
            }
        }
        EnvType::Host => {
            if is_host(raw) {
                Ok(EnvValue::String(raw.to_string()))
            } else {
                Err(invalid(env_type, raw))
            }
        }
        EnvType::Port => decode_port(raw)
            .map(EnvValue::Port)
            .ok_or_else(|| invalid(env_type, raw)),
        EnvType::Url => match url::Url::parse(raw) {
            Ok(_) => Ok(EnvValue::String(raw.to_string())),
            Err(_) => Err(invalid(env_type, raw)),
        },
        EnvType::Json => serde_json::from_str(raw)
            .map(EnvValue::Json)
            .map_err(|_| invalid(env_type, raw)),
        EnvType::Base64String => decode_base64(raw)
            .and_then(|bytes| {
                String::from_utf8(bytes).map_err(|_| "decoded bytes are not valid UTF-8".to_string())
            })
            .map(EnvValue::String)
            .map_err(|reason| base64_error(env_type, &reason)),
        EnvType::Base64Json => decode_base64(raw)
            .and_then(|bytes| serde_json::from_slice(&bytes).map_err(|e| e.to_string()))
            .map(EnvValue::Json)
            .map_err(|reason| base64_error(env_type, &reason)),
    }
}

/// Message for a value that is present but not valid UTF-8.
///
/// `lossy` is the value with invalid sequences replaced.
pub fn reject_non_utf8(env_type: EnvType, lossy: &str) -> String {
    match env_type {
        EnvType::Base64String | EnvType::Base64Json => {
            base64_error(env_type, "value is not valid UTF-8")
        }
        _ => invalid(env_type, lossy),
    }
}

fn invalid(env_type: EnvType, raw: &str) -> String {
    let label = match env_type {
        EnvType::Str => "Not a string",
        EnvType::Bool => "Invalid bool input",
        EnvType::Num => "Invalid number input",
        EnvType::Email => "Invalid email address",
        EnvType::Host => "Invalid host (domain or ip)",
        EnvType::Port => "Invalid port input",
        EnvType::Url => "Invalid url",
        EnvType::Json => "Invalid json",
        EnvType::Base64String => "Invalid base64-encoded string",
        EnvType::Base64Json => "Invalid base64-encoded JSON",
    };
    format!("{}: \"{}\"", label, raw)
}

fn base64_error(env_type: EnvType, reason: &str) -> String {
    match env_type {
        EnvType::Base64Json => format!("Invalid base64-encoded JSON: {}", reason),
        _ => format!("Invalid base64-encoded string: {}", reason),
    }
}

fn decode_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" | "t" | "yes" | "on" | "1" => Some(true),
        "false" | "f" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn decode_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

// Only the canonical spelling is accepted: no sign, no leading zeros.
fn decode_port(raw: &str) -> Option<u16> {
    let port = raw.parse::<u16>().ok()?;
    (port != 0 && port.to_string() == raw).then_some(port)
}

fn is_host(raw: &str) -> bool {
    raw.parse::<IpAddr>().is_ok() || is_hostname(raw)
}

// A trailing dot leaves an empty last label and is rejected.
fn is_hostname(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    let labels: Vec<&str> = raw.split('.').collect();
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    // An all-numeric last label would make "1" or "10.0.0.256" a hostname.
    let tld_ok = labels
        .last()
        .is_some_and(|tld| !tld.chars().all(|c| c.is_ascii_digit()));

    labels_ok && tld_ok
}

/// Accepts standard and URL-safe alphabets, with or without padding, and
/// ignores embedded ASCII whitespace.
fn decode_base64(raw: &str) -> Result<Vec<u8>, String> {
    let normalized: String = raw
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    STANDARD_NO_PAD
        .decode(normalized.trim_end_matches('='))
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok(env_type: EnvType, raw: &str) -> EnvValue {
        decode(env_type, raw).unwrap_or_else(|e| panic!("{raw:?} as {env_type}: {e}"))
    }

    fn err(env_type: EnvType, raw: &str) -> String {
        decode(env_type, raw).unwrap_err()
    }

    #[test]
    fn str_accepts_anything() {
        assert_eq!(ok(EnvType::Str, ""), EnvValue::String(String::new()));
        assert_eq!(ok(EnvType::Str, "test"), EnvValue::String("test".into()));
    }

    #[test]
    fn bool_accepts_aliases() {
        for raw in ["true", "t", "yes", "on", "1"] {
            assert_eq!(ok(EnvType::Bool, raw), EnvValue::Bool(true));
        }
        for raw in ["false", "f", "no", "off", "0"] {
            assert_eq!(ok(EnvType::Bool, raw), EnvValue::Bool(false));
        }
    }

    #[test]
    fn bool_rejects_other_input() {
        assert_eq!(err(EnvType::Bool, ""), "Invalid bool input: \"\"");
        assert_eq!(err(EnvType::Bool, "TRUE"), "Invalid bool input: \"TRUE\"");
    }

    #[test]
    fn num_parses_finite_numbers() {
        assert_eq!(ok(EnvType::Num, "69"), EnvValue::Number(69.0));
        assert_eq!(ok(EnvType::Num, "-1.5e3"), EnvValue::Number(-1500.0));
    }

    #[test]
    fn num_rejects_empty_and_non_finite() {
        assert_eq!(err(EnvType::Num, ""), "Invalid number input: \"\"");
        assert_eq!(err(EnvType::Num, "inf"), "Invalid number input: \"inf\"");
        assert_eq!(err(EnvType::Num, "NaN"), "Invalid number input: \"NaN\"");
        assert_eq!(err(EnvType::Num, "12abc"), "Invalid number input: \"12abc\"");
    }

    #[test]
    fn email_validation() {
        assert_eq!(
            ok(EnvType::Email, "test@gmail.com"),
            EnvValue::String("test@gmail.com".into())
        );
        assert_eq!(
            err(EnvType::Email, "t@est@gmail.com.illegal"),
            "Invalid email address: \"t@est@gmail.com.illegal\""
        );
        assert!(decode(EnvType::Email, "no-at-sign.com").is_err());
        assert!(decode(EnvType::Email, "a b@c.d").is_err());
    }

    #[test]
    fn host_accepts_ips_and_hostnames() {
        for raw in ["0.0.0.0", "::1", "localhost", "db.internal", "api-1.example.com"] {
            assert_eq!(ok(EnvType::Host, raw), EnvValue::String(raw.into()));
        }
    }

    #[test]
    fn host_rejects_malformed_names() {
        assert_eq!(err(EnvType::Host, "1"), "Invalid host (domain or ip): \"1\"");
        for raw in ["", "-bad.com", "bad-.com", "a..b", "under_score.com", "10.0.0.256"] {
            assert!(decode(EnvType::Host, raw).is_err(), "{raw:?} should be rejected");
        }
        let long_label = format!("{}.com", "a".repeat(64));
        assert!(decode(EnvType::Host, &long_label).is_err());
    }

    #[test]
    fn host_rejects_trailing_dot() {
        assert_eq!(
            err(EnvType::Host, "example.com."),
            "Invalid host (domain or ip): \"example.com.\""
        );
        assert!(decode(EnvType::Host, ".").is_err());
    }

    #[test]
    fn port_accepts_canonical_range() {
        assert_eq!(ok(EnvType::Port, "3000"), EnvValue::Port(3000));
        assert_eq!(ok(EnvType::Port, "1"), EnvValue::Port(1));
        assert_eq!(ok(EnvType::Port, "65535"), EnvValue::Port(65535));
    }

    #[test]
    fn port_rejects_out_of_range_and_non_canonical() {
        assert_eq!(err(EnvType::Port, "30000000"), "Invalid port input: \"30000000\"");
        for raw in ["0", "65536", "080", "+80", "80.0", " 80", ""] {
            assert!(decode(EnvType::Port, raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn url_requires_absolute_url() {
        assert_eq!(
            ok(EnvType::Url, "https://google.com"),
            EnvValue::String("https://google.com".into())
        );
        assert_eq!(err(EnvType::Url, "help.google"), "Invalid url: \"help.google\"");
    }

    #[test]
    fn json_parses_documents() {
        assert_eq!(
            ok(EnvType::Json, r#"{"test": true}"#),
            EnvValue::Json(json!({"test": true}))
        );
        assert_eq!(ok(EnvType::Json, "[1,2]"), EnvValue::Json(json!([1, 2])));
        assert_eq!(
            err(EnvType::Json, r#"{"test: true}"#),
            r#"Invalid json: "{"test: true}""#
        );
    }

    #[test]
    fn base64_string_decodes() {
        assert_eq!(ok(EnvType::Base64String, "dGVzdA=="), EnvValue::String("test".into()));
        assert_eq!(ok(EnvType::Base64String, "dGVzdA"), EnvValue::String("test".into()));
    }

    #[test]
    fn base64_accepts_url_safe_alphabet() {
        // {"a":"???"} encodes with a '/' in the standard alphabet
        let standard = ok(EnvType::Base64Json, "eyJhIjoiPz8/In0=");
        let url_safe = ok(EnvType::Base64Json, "eyJhIjoiPz8_In0");
        assert_eq!(standard, url_safe);
        assert_eq!(standard, EnvValue::Json(json!({"a": "???"})));
    }

    #[test]
    fn base64_string_rejects_garbage() {
        let msg = err(EnvType::Base64String, "not*base64");
        assert!(msg.starts_with("Invalid base64-encoded string: "), "{msg}");
    }

    #[test]
    fn base64_string_rejects_non_utf8_payload() {
        // 0xff 0xfe
        assert_eq!(
            err(EnvType::Base64String, "//4="),
            "Invalid base64-encoded string: decoded bytes are not valid UTF-8"
        );
    }

    #[test]
    fn base64_json_round_trips_to_parsed_object() {
        assert_eq!(
            ok(EnvType::Base64Json, "eyJ0ZXN0IjogdHJ1ZX0="),
            EnvValue::Json(json!({"test": true}))
        );
    }

    #[test]
    fn base64_json_rejects_non_json_payload() {
        let msg = err(EnvType::Base64Json, "dGVzdA==");
        assert!(msg.starts_with("Invalid base64-encoded JSON: "), "{msg}");
    }

    #[test]
    fn non_utf8_rejections_follow_type() {
        assert_eq!(reject_non_utf8(EnvType::Str, "a\u{fffd}"), "Not a string: \"a\u{fffd}\"");
        assert_eq!(
            reject_non_utf8(EnvType::Port, "\u{fffd}"),
            "Invalid port input: \"\u{fffd}\""
        );
        assert_eq!(
            reject_non_utf8(EnvType::Base64Json, "\u{fffd}"),
            "Invalid base64-encoded JSON: value is not valid UTF-8"
        );
    }
}
