//! Primitive conversions driven by the `boolean`, `integer` and `numeric` rules
//!
//! None of these conversions fail. Input that does not look like a number
//! degrades to zero, which is the permissive behaviour callers rely on.
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

use crate::value::is_truthy;
use serde_json::Value;

/// Convert a raw value to a boolean.
///
/// The result is `false` when the value is falsy or is exactly the string
/// `"false"`, and `true` otherwise.
pub fn as_boolean(value: &Value) -> bool {
    is_truthy(value) && value.as_str() != Some("false")
}

/// Convert a raw value to an integer, truncating toward zero
pub fn as_integer(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.as_u64().is_some() {
                i64::MAX
            } else {
                n.as_f64().map_or(0, |f| f as i64)
            }
        }
        Value::String(s) => integer_from_str(s),
        Value::Array(_) | Value::Object(_) => i64::from(is_truthy(value)),
    }
}

/// Convert a raw value to a float
pub fn as_numeric(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => numeric_prefix(s)
            .and_then(|(prefix, _)| prefix.parse::<f64>().ok())
            .unwrap_or(0.0),
        Value::Array(_) | Value::Object(_) => f64::from(u8::from(is_truthy(value))),
    }
}

fn integer_from_str(s: &str) -> i64 {
    let Some((prefix, integral)) = numeric_prefix(s) else {
        return 0;
    };

    if integral {
        // i64 parsing only fails here on overflow
        return prefix.parse::<i64>().unwrap_or_else(|_| {
            if prefix.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        });
    }

    prefix.parse::<f64>().map_or(0, |f| f as i64)
}

/// Find the leading numeric portion of a string.
///
/// Accepts leading whitespace, an optional sign, digits with an optional
/// fraction, and an optional exponent. Returns the prefix (without the
/// leading whitespace) and whether it is a plain integer.
pub(crate) fn numeric_prefix(input: &str) -> Option<(&str, bool)> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_digits = count_digits(end);
    end += int_digits;
    let mut integral = true;

    let mut frac_digits = 0;
    if end < len && bytes[end] == b'.' {
        frac_digits = count_digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
            integral = false;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = count_digits(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
            integral = false;
        }
    }

    Some((&s[..end], integral))
}
