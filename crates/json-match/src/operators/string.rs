//! String prefix/suffix operators.

use crate::error::MatchError;
use serde_json::Value;

fn strings<'a>(
    operator: &'static str,
    actual: Option<&'a Value>,
    compare: &'a Value,
) -> Result<(&'a str, &'a str), MatchError> {
    match (actual, compare) {
        (Some(Value::String(outer)), Value::String(inner)) => Ok((outer.as_str(), inner.as_str())),
        _ => Err(MatchError::TypeMismatch { operator }),
    }
}

pub fn starts_with(actual: Option<&Value>, compare: &Value) -> Result<bool, MatchError> {
    let (outer, inner) = strings("_$startsWith", actual, compare)?;
    Ok(outer.starts_with(inner))
}

pub fn ends_with(actual: Option<&Value>, compare: &Value) -> Result<bool, MatchError> {
    let (outer, inner) = strings("_$endsWith", actual, compare)?;
    Ok(outer.ends_with(inner))
}
