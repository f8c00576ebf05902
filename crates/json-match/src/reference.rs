//! Cross-field references (`{"_$ref": "path"}`).

use crate::error::MatchError;
use crate::index::IndexPath;
use crate::util;
use serde_json::Value;
use std::borrow::Cow;

/// Placeholder replaced by the current array position inside reference paths.
pub const INDEX_PLACEHOLDER: &str = "_$index";

static NULL: Value = Value::Null;

/// Replaces placeholders with the traversal indices, outermost first, one
/// index per occurrence. Paths without a bracketed placeholder are returned
/// unchanged.
pub fn substitute_indexes<'r>(reference: &'r str, indexes: &IndexPath<'_>) -> Cow<'r, str> {
    if !reference.contains("[_$index]") {
        return Cow::Borrowed(reference);
    }
    let mut path = reference.to_string();
    for index in indexes.to_vec() {
        path = path.replacen(INDEX_PLACEHOLDER, &index.to_string(), 1);
    }
    Cow::Owned(path)
}

/// Anchors a reference path at the document root.
pub fn rooted(path: &str) -> Cow<'_, str> {
    if path.starts_with('$') {
        Cow::Borrowed(path)
    } else if path.starts_with('[') {
        Cow::Owned(format!("${path}"))
    } else {
        Cow::Owned(format!("$.{path}"))
    }
}

/// Resolves a reference expression against `root`.
///
/// The expression must be a string path. When the path addresses nothing the
/// reference resolves to `null`.
pub fn resolve_reference<'r>(
    expr: &Value,
    root: &'r Value,
    indexes: &IndexPath<'_>,
) -> Result<&'r Value, MatchError> {
    let Value::String(reference) = expr else {
        return Err(MatchError::InvalidReference(format!(
            "expected a path string, got {}",
            util::type_name(Some(expr))
        )));
    };

    let substituted = substitute_indexes(reference, indexes);
    let path = rooted(&substituted);
    let found = json_match_path::query(root, &path, 1)
        .map_err(|err| MatchError::InvalidReference(format!("{path}: {err}")))?;
    let resolved = found.first().copied().unwrap_or(&NULL);

    tracing::trace!(%reference, %path, %resolved, "resolved reference");
    Ok(resolved)
}
