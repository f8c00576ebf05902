//! Declarative JSON matching.
//!
//! A schema is itself JSON. Plain values match by (loose) equality, objects
//! match field by field, and `_$`-prefixed keys add operators (`_$gt`,
//! `_$in`, `_$startsWith`, ...), boolean combinators (`_$and`, `_$or`,
//! `_$not`) and references to other parts of the input (`_$ref`).
//!
//! ```
//! use json_match::{matches, Schema};
//! use serde_json::json;
//!
//! let order = json!({
//!     "status": "paid",
//!     "total": 120,
//!     "limit": 100,
//!     "lines": [{"sku": "A-1", "qty": 2}, {"sku": "B-7", "qty": 1}],
//! });
//!
//! assert!(matches(&order, &json!({
//!     "status": {"_$in": ["paid", "shipped"]},
//!     "total": {"_$gt": {"_$ref": "limit"}},
//!     "lines": {"sku": {"_$startsWith": "B-"}},
//! })));
//!
//! // Parse once, match many times.
//! let unpaid = Schema::parse(&json!({"_$not": {"status": "paid"}}));
//! assert!(!unpaid.matches(&order));
//! ```
//!
//! Matching never fails: an invalid reference or an operand of the wrong
//! type only makes the affected condition false.

pub mod cli;
pub mod error;
pub mod index;
pub mod match_ctx;
pub mod matcher;
pub mod operators;
pub mod reference;
pub mod schema;
pub mod types;
pub mod util;
pub mod value;

pub use error::MatchError;
pub use index::IndexPath;
pub use match_ctx::MatchCtx;
pub use matcher::matches;
pub use operators::Operator;
pub use schema::{Field, Member, ObjectSchema, Schema};
pub use types::MatchOutcome;
pub use value::compare_value;
