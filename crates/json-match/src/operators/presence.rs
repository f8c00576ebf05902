//! The `_$exist` operator.

use crate::error::MatchError;
use serde_json::Value;

/// `true` requires the value to be present, `false` requires it to be absent.
/// A present `null` counts as present.
pub fn exist(actual: Option<&Value>, compare: &Value) -> Result<bool, MatchError> {
    match compare {
        Value::Bool(expected) => Ok(actual.is_some() == *expected),
        _ => Err(MatchError::TypeMismatch { operator: "_$exist" }),
    }
}
