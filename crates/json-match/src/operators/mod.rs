//! Operator registry.
//!
//! Operators are the `_$`-prefixed keys of an operator map, each a binary
//! predicate over the actual value and a comparison value. The set is closed.

pub mod comparison;
pub mod container;
pub mod presence;
pub mod string;

use crate::error::MatchError;
use serde_json::Value;

/// Prefix shared by every operator, combinator and reference key.
pub const KEY_PREFIX: &str = "_$";

/// Evaluation function of an operator. `actual` is `None` when the value is
/// absent from the input.
pub type OperatorFn = fn(Option<&Value>, &Value) -> Result<bool, MatchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Neq,
    In,
    Nin,
    StartsWith,
    EndsWith,
    Gte,
    Gt,
    Lte,
    Lt,
    Exist,
}

impl Operator {
    pub const ALL: [Operator; 11] = [
        Operator::Eq,
        Operator::Neq,
        Operator::In,
        Operator::Nin,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::Gte,
        Operator::Gt,
        Operator::Lte,
        Operator::Lt,
        Operator::Exist,
    ];

    /// The schema key naming this operator.
    pub fn key(self) -> &'static str {
        match self {
            Operator::Eq => "_$eq",
            Operator::Neq => "_$neq",
            Operator::In => "_$in",
            Operator::Nin => "_$nin",
            Operator::StartsWith => "_$startsWith",
            Operator::EndsWith => "_$endsWith",
            Operator::Gte => "_$gte",
            Operator::Gt => "_$gt",
            Operator::Lte => "_$lte",
            Operator::Lt => "_$lt",
            Operator::Exist => "_$exist",
        }
    }

    pub fn from_key(key: &str) -> Option<Operator> {
        if !key.starts_with(KEY_PREFIX) {
            return None;
        }
        Self::ALL.into_iter().find(|op| op.key() == key)
    }

    fn eval_fn(self) -> OperatorFn {
        match self {
            Operator::Eq => comparison::eq,
            Operator::Neq => comparison::neq,
            Operator::In => container::is_in,
            Operator::Nin => container::not_in,
            Operator::StartsWith => string::starts_with,
            Operator::EndsWith => string::ends_with,
            Operator::Gte => comparison::gte,
            Operator::Gt => comparison::gt,
            Operator::Lte => comparison::lte,
            Operator::Lt => comparison::lt,
            Operator::Exist => presence::exist,
        }
    }

    /// Evaluates the operator. Incompatible operand types are reported as
    /// [`MatchError::TypeMismatch`].
    pub fn apply(self, actual: Option<&Value>, compare: &Value) -> Result<bool, MatchError> {
        (self.eval_fn())(actual, compare)
    }

    /// Like [`Operator::apply`], but a type mismatch counts as a failed
    /// operator.
    pub fn test(self, actual: Option<&Value>, compare: &Value) -> bool {
        match self.apply(actual, compare) {
            Ok(passed) => passed,
            Err(err) => {
                tracing::trace!(operator = %self, error = %err, "operator failed on operand types");
                false
            }
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
