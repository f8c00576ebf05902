//! Schema model.
//!
//! A raw JSON schema is parsed into [`Schema`] before matching. Objects keep
//! every key as a [`Member`]: combinators with array values become `Or`/`And`,
//! everything else (operators and `_$ref` included) stays a named field,
//! because an object schema is read differently depending on what it is
//! compared against. Operator maps and references are recognised from the
//! same members.

use crate::index::IndexPath;
use crate::match_ctx::MatchCtx;
use crate::operators::Operator;
use crate::util;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

pub const OR_KEY: &str = "_$or";
pub const AND_KEY: &str = "_$and";
pub const NOT_KEY: &str = "_$not";
pub const REF_KEY: &str = "_$ref";

#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// `null`, a boolean, a number or a string.
    Literal(Value),
    Array(Vec<Schema>),
    Object(ObjectSchema),
    /// An object with a truthy `_$not`. `rest` holds the remaining keys as a
    /// [`Schema::Object`], or `None` when `_$not` was the only key.
    Not {
        negated: Box<Schema>,
        rest: Option<Box<Schema>>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSchema {
    members: Vec<Member>,
    reference: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// `_$or` holding an array of conditions.
    Or(Vec<Schema>),
    /// `_$and` holding an array of conditions.
    And(Vec<Schema>),
    Field(Field),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// Set when `name` is an operator key.
    pub operator: Option<Operator>,
    pub schema: Schema,
    /// The unparsed value, used as the operand when `operator` is set.
    pub raw: Value,
}

impl Schema {
    pub fn parse(value: &Value) -> Schema {
        match value {
            Value::Array(items) => Schema::Array(items.iter().map(Schema::parse).collect()),
            Value::Object(map) => match map.get(NOT_KEY).filter(|v| util::is_truthy(v)) {
                Some(negated) => {
                    let rest = ObjectSchema::parse(map, true);
                    Schema::Not {
                        negated: Box::new(Schema::parse(negated)),
                        rest: (!rest.is_empty()).then(|| Box::new(Schema::Object(rest))),
                    }
                }
                None => Schema::Object(ObjectSchema::parse(map, false)),
            },
            primitive => Schema::Literal(primitive.clone()),
        }
    }

    /// The object keys other than an active `_$not`.
    pub fn body(&self) -> Option<&ObjectSchema> {
        match self {
            Schema::Object(body) => Some(body),
            Schema::Not { rest, .. } => rest.as_deref().and_then(Schema::body),
            _ => None,
        }
    }

    /// Whether this schema carries `_$exist: false`, which makes a missing
    /// field evaluate against the absent value instead of failing outright.
    pub fn requires_absence(&self) -> bool {
        self.body().is_some_and(ObjectSchema::requires_absence)
    }

    /// Tests `input` against this schema. Errors raised while matching (an
    /// invalid reference, for instance) make the result `false`.
    pub fn matches(&self, input: &Value) -> bool {
        let ctx = MatchCtx::new(input);
        crate::matcher::match_schema(Some(input), self, &ctx, &IndexPath::root())
    }
}

impl ObjectSchema {
    fn parse(map: &Map<String, Value>, skip_not: bool) -> ObjectSchema {
        let members = map
            .iter()
            .filter(|(key, _)| !(skip_not && key.as_str() == NOT_KEY))
            .map(|(key, value)| match (key.as_str(), value) {
                (OR_KEY, Value::Array(conditions)) => {
                    Member::Or(conditions.iter().map(Schema::parse).collect())
                }
                (AND_KEY, Value::Array(conditions)) => {
                    Member::And(conditions.iter().map(Schema::parse).collect())
                }
                _ => Member::Field(Field {
                    name: key.clone(),
                    operator: Operator::from_key(key),
                    schema: Schema::parse(value),
                    raw: value.clone(),
                }),
            })
            .collect();
        let reference = map.get(REF_KEY).filter(|v| util::is_truthy(v)).cloned();

        ObjectSchema { members, reference }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn or_conditions(&self) -> Option<&[Schema]> {
        self.members.iter().find_map(|member| match member {
            Member::Or(conditions) => Some(conditions.as_slice()),
            _ => None,
        })
    }

    /// The `_$ref` expression, when truthy.
    pub fn reference(&self) -> Option<&Value> {
        self.reference.as_ref()
    }

    /// Operator fields with their operands, in key order.
    pub fn operators(&self) -> impl Iterator<Item = (Operator, &Value)> + '_ {
        self.members.iter().filter_map(|member| match member {
            Member::Field(Field { operator: Some(op), raw, .. }) => Some((*op, raw)),
            _ => None,
        })
    }

    pub fn has_operators(&self) -> bool {
        self.operators().next().is_some()
    }

    fn requires_absence(&self) -> bool {
        self.operators()
            .any(|(op, operand)| op == Operator::Exist && *operand == Value::Bool(false))
    }
}

/// The reference expression of an operand written as `{"_$ref": ...}`.
pub fn operand_reference(operand: &Value) -> Option<&Value> {
    operand
        .as_object()
        .and_then(|map| map.get(REF_KEY))
        .filter(|v| util::is_truthy(v))
}

impl From<&Value> for Schema {
    fn from(value: &Value) -> Self {
        Schema::parse(value)
    }
}

impl From<Value> for Schema {
    fn from(value: Value) -> Self {
        Schema::parse(&value)
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(|value| Schema::parse(&value))
    }
}
