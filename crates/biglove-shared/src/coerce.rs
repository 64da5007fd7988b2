//! Lenient integer coercion for request values.
//!
//! Clients send ids and paging bounds as text (path segments, query strings)
//! or as loosely typed JSON. Every such value goes through the rules below,
//! which mirror `parseInt(value)` from the JavaScript clients this API was
//! first written for: leading whitespace is skipped, an optional sign and an
//! optional `0x` prefix are honoured, the longest run of digits is read and
//! the rest is ignored. `None` stands for "not a number".

use serde_json::Value;

/// Parse the leading integer of `input`, `None` when there are no digits.
///
/// ```
/// use biglove_shared::coerce::parse_int;
/// assert_eq!(parse_int("3.9"), Some(3));
/// assert_eq!(parse_int("  12abc"), Some(12));
/// assert_eq!(parse_int("abc"), None);
/// ```
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in s.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        seen_digit = true;
        value = value.saturating_mul(i64::from(radix)).saturating_add(i64::from(d));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Coerce a JSON body value to an integer.
///
/// Numbers are truncated toward zero, strings go through [`parse_int`],
/// everything else is not a number.
pub fn json_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => parse_int(s),
        _ => None,
    }
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String form of an optional JSON value as JavaScript's `String(value)`
/// renders it. An absent value is `"undefined"`.
///
/// Used where a body field becomes an object key.
pub fn js_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string()),
        },
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
        Some(other) => other.to_string(),
    }
}
