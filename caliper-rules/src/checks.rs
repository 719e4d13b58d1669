// Value predicates shared by the rule kinds

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// RFC-5322-lite: quoted or dot-atom local part, bracketed IPv4 or
// dotted-label domain.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .unwrap()
});

/// An integer is a number whose value round-trips through integer parsing
/// exactly: i64/u64, or a float with no fractional part. Numeric strings
/// are not integers.
pub(crate) fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
        }
        _ => false,
    }
}

/// Any JSON number parses as a float.
pub(crate) fn is_float(value: &Value) -> bool {
    value.is_number()
}

pub(crate) fn is_email(value: &Value) -> bool {
    value.as_str().is_some_and(|s| EMAIL_REGEX.is_match(s))
}

/// Length of the values that have one: strings in characters, arrays in
/// elements. Everything else has no length.
pub(crate) fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// String form used by pattern checks: string content as-is, the JSON
/// rendering for everything else.
pub(crate) fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
