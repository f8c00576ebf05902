//! Schema-level matching: `_$not`, `_$and`/`_$or` members and per-field
//! semantics for object inputs.

use crate::error::MatchError;
use crate::index::IndexPath;
use crate::match_ctx::MatchCtx;
use crate::schema::{Member, ObjectSchema, Schema};
use crate::types::MatchOutcome;
use crate::value::compare_value;
use serde_json::{Map, Value};

/// Tests `input` against a raw JSON `schema`.
///
/// The schema is parsed on every call. Evaluation errors never escape: an
/// invalid reference or an unsupported operand makes the affected part of the
/// schema fail to match, so the only failure signal is `false`.
///
/// ```
/// use json_match::matches;
/// use serde_json::json;
///
/// let event = json!({"type": "created", "count": 2});
/// assert!(matches(&event, &json!({"type": "created", "count": {"_$gt": 1}})));
/// assert!(!matches(&event, &json!({"_$not": {"type": "created"}})));
/// ```
pub fn matches(input: &Value, schema: &Value) -> bool {
    Schema::parse(schema).matches(input)
}

/// Error boundary around [`try_match_schema`]: errors become `false` for this
/// call only, so an enclosing `_$not` still sees a plain non-match.
pub(crate) fn match_schema(
    actual: Option<&Value>,
    schema: &Schema,
    ctx: &MatchCtx<'_>,
    indexes: &IndexPath<'_>,
) -> bool {
    match try_match_schema(actual, schema, ctx, indexes) {
        Ok(outcome) => outcome.is_match(),
        Err(err) => {
            tracing::debug!(error = %err, "schema evaluation failed, treating as no match");
            false
        }
    }
}

fn try_match_schema(
    actual: Option<&Value>,
    schema: &Schema,
    ctx: &MatchCtx<'_>,
    indexes: &IndexPath<'_>,
) -> Result<MatchOutcome, MatchError> {
    // `_$not` is one more condition next to its siblings: a matching negated
    // schema decides the result, otherwise the siblings do.
    let schema = match schema {
        Schema::Not { negated, rest } => {
            let negated_matches = match_schema(actual, negated, ctx, indexes);
            match rest {
                Some(rest) if !negated_matches => rest.as_ref(),
                _ => return Ok((!negated_matches).into()),
            }
        }
        other => other,
    };

    match (actual, schema) {
        (Some(value), _) if !value.is_object() => compare_value(actual, schema, ctx, indexes),
        (_, Schema::Object(body)) => object_holds(actual, body, ctx, indexes),
        (_, Schema::Array(items)) => indexed_fields_hold(actual, items, ctx, indexes),
        _ => compare_value(actual, schema, ctx, indexes),
    }
}

/// Every member must hold. Fields of an absent value never hold.
fn object_holds(
    actual: Option<&Value>,
    body: &ObjectSchema,
    ctx: &MatchCtx<'_>,
    indexes: &IndexPath<'_>,
) -> Result<MatchOutcome, MatchError> {
    let fields = actual.and_then(Value::as_object);
    for member in body.members() {
        let holds = match member {
            Member::Or(conditions) => conditions
                .iter()
                .any(|condition| match_schema(actual, condition, ctx, indexes)),
            Member::And(conditions) => conditions
                .iter()
                .all(|condition| match_schema(actual, condition, ctx, indexes)),
            Member::Field(field) => match fields {
                Some(fields) => field_holds(fields.get(&field.name), &field.schema, ctx, indexes)?,
                None => false,
            },
        };
        if !holds {
            return Ok(MatchOutcome::Mismatch);
        }
    }
    Ok(MatchOutcome::Match)
}

/// An array schema compared with an object reads as fields `"0"`, `"1"`, ...
fn indexed_fields_hold(
    actual: Option<&Value>,
    items: &[Schema],
    ctx: &MatchCtx<'_>,
    indexes: &IndexPath<'_>,
) -> Result<MatchOutcome, MatchError> {
    let empty = Map::new();
    let fields = match actual.and_then(Value::as_object) {
        Some(fields) => fields,
        None if items.is_empty() => &empty,
        None => return Ok(MatchOutcome::Mismatch),
    };
    for (i, item) in items.iter().enumerate() {
        if !field_holds(fields.get(&i.to_string()), item, ctx, indexes)? {
            return Ok(MatchOutcome::Mismatch);
        }
    }
    Ok(MatchOutcome::Match)
}

/// A missing field fails unless its schema asks for `_$exist: false`, in which
/// case it is compared as an absent value.
fn field_holds(
    value: Option<&Value>,
    schema: &Schema,
    ctx: &MatchCtx<'_>,
    indexes: &IndexPath<'_>,
) -> Result<bool, MatchError> {
    if value.is_none() && !schema.requires_absence() {
        return Ok(false);
    }
    Ok(compare_value(value, schema, ctx, indexes)?.is_match())
}
