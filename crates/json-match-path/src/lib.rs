//! Path queries over `serde_json` documents.
//!
//! A compact JSONPath dialect: member access (`.name`, `['name']`), array
//! indices (negative from the end), slices, wildcards and recursive descent.
//! Filter expressions are not supported.
//!
//! # Example
//!
//! ```
//! use json_match_path::query;
//! use serde_json::json;
//!
//! let doc = json!({"test": [{"b": 1}, {"b": 2}]});
//! let found = query(&doc, "$.test[1].b", 1).unwrap();
//! assert_eq!(found, vec![&json!(2)]);
//! ```

mod types;
pub use types::*;

mod parser;
pub use parser::{JsonPathParser, ParseError};

mod eval;
pub use eval::JsonPathEval;

use serde_json::Value;

/// Parses `path` and returns at most `limit` addressed values from `root`.
///
/// A `limit` of zero returns every result.
pub fn query<'a>(root: &'a Value, path: &str, limit: usize) -> Result<Vec<&'a Value>, ParseError> {
    let parsed = JsonPathParser::parse(path)?;
    let mut results = JsonPathEval::eval(&parsed, root);
    if limit > 0 {
        results.truncate(limit);
    }
    Ok(results)
}
