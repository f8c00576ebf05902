//! Recursive comparison of one value against one schema fragment.

use crate::error::MatchError;
use crate::index::IndexPath;
use crate::match_ctx::MatchCtx;
use crate::matcher::match_schema;
use crate::reference::resolve_reference;
use crate::schema::{operand_reference, ObjectSchema, Schema};
use crate::types::MatchOutcome;
use crate::util;
use serde_json::Value;

/// Compares `actual` (`None` when absent) against `schema`.
///
/// - A literal matches an equal primitive, or an array with at least one
///   equal element.
/// - An array schema against an array matches when every sub-schema is
///   matched by some element.
/// - An operator map against an array applies its operators to the whole
///   array; any other schema matches an array when some element matches it.
/// - Object schemas dispatch on `_$or`, then `_$ref`, then operators, and
///   otherwise fall back to structural matching through [`match_schema`].
///
/// Errors from reference resolution propagate; operator type mismatches do
/// not.
pub fn compare_value(
    actual: Option<&Value>,
    schema: &Schema,
    ctx: &MatchCtx<'_>,
    indexes: &IndexPath<'_>,
) -> Result<MatchOutcome, MatchError> {
    match (actual, schema) {
        (Some(Value::Array(items)), Schema::Literal(_)) => any_element(items, schema, ctx, indexes),
        (Some(value), Schema::Literal(literal)) if util::is_primitive(value) => {
            Ok(util::loose_eq(Some(value), Some(literal)).into())
        }
        (_, Schema::Literal(_)) => Ok(MatchOutcome::Mismatch),
        (Some(Value::Array(items)), _) => compare_array(actual, items, schema, ctx, indexes),
        (Some(value), Schema::Array(_)) if util::is_primitive(value) => Ok(MatchOutcome::Mismatch),
        (_, Schema::Array(_)) => Ok(match_schema(actual, schema, ctx, indexes).into()),
        (_, Schema::Object(_) | Schema::Not { .. }) => compare_object(actual, schema, ctx, indexes),
    }
}

fn compare_array(
    array: Option<&Value>,
    items: &[Value],
    schema: &Schema,
    ctx: &MatchCtx<'_>,
    indexes: &IndexPath<'_>,
) -> Result<MatchOutcome, MatchError> {
    if let Schema::Array(sub_schemas) = schema {
        for sub_schema in sub_schemas {
            if any_element(items, sub_schema, ctx, indexes)?.is_mismatch() {
                return Ok(MatchOutcome::Mismatch);
            }
        }
        return Ok(MatchOutcome::Match);
    }

    match schema.body().filter(|body| body.has_operators()) {
        // Operands are taken as written here; `_$ref` operands are only
        // resolved against non-array values.
        Some(body) => Ok(body
            .operators()
            .all(|(op, operand)| op.test(array, operand))
            .into()),
        None => any_element(items, schema, ctx, indexes),
    }
}

/// Matches when at least one element matches `schema`. Each element is
/// compared with its position pushed onto `indexes`.
fn any_element(
    items: &[Value],
    schema: &Schema,
    ctx: &MatchCtx<'_>,
    indexes: &IndexPath<'_>,
) -> Result<MatchOutcome, MatchError> {
    for (i, item) in items.iter().enumerate() {
        let position = indexes.push(i);
        if compare_value(Some(item), schema, ctx, &position)?.is_match() {
            return Ok(MatchOutcome::Match);
        }
    }
    Ok(MatchOutcome::Mismatch)
}

fn compare_object(
    actual: Option<&Value>,
    schema: &Schema,
    ctx: &MatchCtx<'_>,
    indexes: &IndexPath<'_>,
) -> Result<MatchOutcome, MatchError> {
    if let Some(body) = schema.body() {
        if let Some(conditions) = body.or_conditions() {
            let any = conditions
                .iter()
                .any(|condition| match_schema(actual, condition, ctx, indexes));
            return Ok(any.into());
        }

        if let Some(expr) = body.reference() {
            let resolved = resolve_reference(expr, ctx.root, indexes)?;
            return compare_value(actual, &Schema::parse(resolved), ctx, indexes);
        }

        if body.has_operators() {
            return apply_operators(actual, body, ctx, indexes);
        }
    }

    match actual {
        Some(value) if util::is_primitive(value) => Ok(MatchOutcome::Mismatch),
        _ => Ok(match_schema(actual, schema, ctx, indexes).into()),
    }
}

/// Every operator of the map must pass. Stops at the first failing operator,
/// so references of later operands are not resolved.
fn apply_operators(
    actual: Option<&Value>,
    body: &ObjectSchema,
    ctx: &MatchCtx<'_>,
    indexes: &IndexPath<'_>,
) -> Result<MatchOutcome, MatchError> {
    for (op, operand) in body.operators() {
        let operand = match operand_reference(operand) {
            Some(expr) => resolve_reference(expr, ctx.root, indexes)?,
            None => operand,
        };
        if !op.test(actual, operand) {
            return Ok(MatchOutcome::Mismatch);
        }
    }
    Ok(MatchOutcome::Match)
}
