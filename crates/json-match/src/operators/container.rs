//! Membership operators.

use crate::error::MatchError;
use crate::util;
use serde_json::Value;

/// An array comparison value must contain the actual value; a string
/// comparison value must be a substring of the actual string.
fn contains(
    operator: &'static str,
    actual: Option<&Value>,
    compare: &Value,
) -> Result<bool, MatchError> {
    let mismatch = MatchError::TypeMismatch { operator };
    let value = match actual {
        Some(v) if util::is_primitive(v) => v,
        _ => return Err(mismatch),
    };
    match (compare, value) {
        (Value::Array(items), _) => Ok(items.iter().any(|item| util::strict_eq(item, value))),
        (Value::String(needle), Value::String(haystack)) => Ok(haystack.contains(needle.as_str())),
        _ => Err(mismatch),
    }
}

pub fn is_in(actual: Option<&Value>, compare: &Value) -> Result<bool, MatchError> {
    contains("_$in", actual, compare)
}

pub fn not_in(actual: Option<&Value>, compare: &Value) -> Result<bool, MatchError> {
    contains("_$nin", actual, compare).map(|found| !found)
}
