//! Search criteria
//!
//! A criteria set is a conjunction of equality constraints. Attributes are
//! names, so a criterion may name an attribute records do not have.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::Field;

/// A single equality constraint: attribute = value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub field: String,
    pub value: Value,
}

impl Criterion {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Parse `attribute=value`.
    ///
    /// Only `id` and `price` values that parse as numbers become JSON
    /// numbers. Every other attribute, known or not, keeps the raw string,
    /// so a vendor named `007` stays `"007"`. Returns `None` without an `=`
    /// or with an empty attribute name.
    pub fn from_assignment(s: &str) -> Option<Self> {
        let (field, raw) = s.split_once('=')?;
        let field = field.trim();
        if field.is_empty() {
            return None;
        }
        let raw = raw.trim();

        let value = match Field::parse(field) {
            Some(Field::Id | Field::Price) => numeric_value(raw),
            _ => Value::from(raw),
        };

        Some(Self::eq(field, value))
    }

    /// The record field this criterion names, if it is one
    pub fn resolved_field(&self) -> Option<Field> {
        Field::parse(&self.field)
    }
}

/// Number if `raw` parses as one, otherwise the string itself
fn numeric_value(raw: &str) -> Value {
    if let Ok(i) = raw.parse::<u64>() {
        Value::from(i)
    } else if let Some(n) = raw.parse::<f64>().ok().filter(|f| f.is_finite()) {
        Value::from(n)
    } else {
        Value::from(raw)
    }
}

/// Conjunction of criteria, in caller order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criteria {
    criteria: Vec<Criterion>,
}

impl Criteria {
    /// Empty criteria match every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality constraint
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.criteria.push(Criterion::eq(field, value));
        self
    }

    pub fn push(&mut self, criterion: Criterion) {
        self.criteria.push(criterion);
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    pub fn as_slice(&self) -> &[Criterion] {
        &self.criteria
    }
}

impl FromIterator<Criterion> for Criteria {
    fn from_iter<T: IntoIterator<Item = Criterion>>(iter: T) -> Self {
        Self {
            criteria: iter.into_iter().collect(),
        }
    }
}
