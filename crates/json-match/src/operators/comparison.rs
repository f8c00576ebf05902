//! Equality and ordering operators.

use crate::error::MatchError;
use crate::util;
use serde_json::Value;
use std::cmp::Ordering;

/// Structured operands are compared through their canonical serialization.
fn as_comparable(value: Option<&Value>) -> Option<Value> {
    value.map(|v| {
        if util::is_primitive(v) {
            v.clone()
        } else {
            Value::String(util::canonical(v))
        }
    })
}

pub fn eq(actual: Option<&Value>, compare: &Value) -> Result<bool, MatchError> {
    let left = as_comparable(actual);
    let right = as_comparable(Some(compare));
    Ok(util::loose_eq(left.as_ref(), right.as_ref()))
}

pub fn neq(actual: Option<&Value>, compare: &Value) -> Result<bool, MatchError> {
    eq(actual, compare).map(|equal| !equal)
}

fn is_orderable(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_))
}

fn ordered<'a>(
    operator: &'static str,
    actual: Option<&'a Value>,
    compare: &'a Value,
) -> Result<(&'a Value, &'a Value), MatchError> {
    match actual {
        Some(left) if is_orderable(left) && is_orderable(compare) => Ok((left, compare)),
        _ => Err(MatchError::TypeMismatch { operator }),
    }
}

/// Two strings compare by UTF-16 code units; any other pair compares as
/// numbers, where `NaN` is unordered.
fn compare_values(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::String(a), Value::String(b)) => {
            Some(a.encode_utf16().cmp(b.encode_utf16()))
        }
        _ => util::to_number(left).partial_cmp(&util::to_number(right)),
    }
}

pub fn gte(actual: Option<&Value>, compare: &Value) -> Result<bool, MatchError> {
    let (left, right) = ordered("_$gte", actual, compare)?;
    Ok(matches!(compare_values(left, right), Some(Ordering::Greater | Ordering::Equal)))
}

pub fn gt(actual: Option<&Value>, compare: &Value) -> Result<bool, MatchError> {
    let (left, right) = ordered("_$gt", actual, compare)?;
    Ok(compare_values(left, right) == Some(Ordering::Greater))
}

pub fn lte(actual: Option<&Value>, compare: &Value) -> Result<bool, MatchError> {
    let (left, right) = ordered("_$lte", actual, compare)?;
    Ok(matches!(compare_values(left, right), Some(Ordering::Less | Ordering::Equal)))
}

pub fn lt(actual: Option<&Value>, compare: &Value) -> Result<bool, MatchError> {
    let (left, right) = ordered("_$lt", actual, compare)?;
    Ok(compare_values(left, right) == Some(Ordering::Less))
}
