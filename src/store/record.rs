//! Record types
//!
//! `RawRecord` is the unvalidated input shape. `Record` is the validated,
//! immutable value held by the store.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{TallyError, TallyResult};

/// Fixed calendar format for record dates and range bounds
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
///
/// Strict: unpadded months or days such as `2023-3-10` are rejected.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(s, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == s).then_some(date)
}

/// Unique, stable record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record attributes addressable by criteria, groupings and aggregations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Id,
    Product,
    Category,
    Price,
    Date,
    Vendor,
}

impl Field {
    /// All fields in declaration order
    pub const ALL: [Field; 6] = [
        Field::Id,
        Field::Product,
        Field::Category,
        Field::Price,
        Field::Date,
        Field::Vendor,
    ];

    /// Returns the attribute name
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Product => "product",
            Field::Category => "category",
            Field::Price => "price",
            Field::Date => "date",
            Field::Vendor => "vendor",
        }
    }

    /// Resolve an attribute name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// Only the string-valued descriptive attributes may carry an inverted index.
    pub fn is_indexable(&self) -> bool {
        matches!(self, Field::Product | Field::Category | Field::Vendor)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unvalidated record input
///
/// `price` stays a JSON value so that a non-numeric price is reported
/// against the record's id instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: RecordId,
    pub product: String,
    pub category: String,
    pub price: Value,
    pub date: String,
    pub vendor: String,
}

impl RawRecord {
    /// Creates a raw record
    pub fn new(
        id: u64,
        product: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<Value>,
        date: impl Into<String>,
        vendor: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId(id),
            product: product.into(),
            category: category.into(),
            price: price.into(),
            date: date.into(),
            vendor: vendor.into(),
        }
    }

    /// Validate into an immutable record.
    ///
    /// Rejects a non-numeric, non-finite or negative price and a date that
    /// does not parse as `YYYY-MM-DD`.
    pub fn validate(self) -> TallyResult<Record> {
        let price = match self.price.as_f64() {
            Some(p) => p,
            None => {
                return Err(TallyError::record_format(
                    self.id,
                    format!("price must be a number, got {}", self.price),
                ))
            }
        };
        if !price.is_finite() {
            return Err(TallyError::record_format(self.id, "price must be finite"));
        }
        if price < 0.0 {
            return Err(TallyError::record_format(
                self.id,
                format!("price must be non-negative, got {}", price),
            ));
        }

        let date = parse_date(&self.date).ok_or_else(|| {
            TallyError::record_format(
                self.id,
                format!("date '{}' does not match YYYY-MM-DD", self.date),
            )
        })?;

        Ok(Record {
            id: self.id,
            product: self.product,
            category: self.category,
            price,
            date,
            vendor: self.vendor,
        })
    }
}

/// A validated, immutable record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: RecordId,
    pub product: String,
    pub category: String,
    pub price: f64,
    pub date: NaiveDate,
    pub vendor: String,
}

impl Record {
    /// Returns the field as a JSON value
    pub fn value(&self, field: Field) -> Value {
        match field {
            Field::Id => Value::from(self.id.0),
            Field::Product => Value::from(self.product.as_str()),
            Field::Category => Value::from(self.category.as_str()),
            Field::Price => Value::from(self.price),
            Field::Date => Value::from(self.date.format(DATE_FORMAT).to_string()),
            Field::Vendor => Value::from(self.vendor.as_str()),
        }
    }

    /// Returns the field rendered as a grouping / counting key
    pub fn key(&self, field: Field) -> String {
        match field {
            Field::Id => self.id.to_string(),
            Field::Product => self.product.clone(),
            Field::Category => self.category.clone(),
            Field::Price => self.price.to_string(),
            Field::Date => self.date.format(DATE_FORMAT).to_string(),
            Field::Vendor => self.vendor.clone(),
        }
    }

    /// Exact equality of a named attribute against a value.
    ///
    /// Unknown attribute names never match. Numbers compare by value,
    /// dates compare against their `YYYY-MM-DD` rendering. No other
    /// coercion: the string "1200" does not equal the price 1200.
    pub fn field_equals(&self, name: &str, expected: &Value) -> bool {
        let Some(field) = Field::parse(name) else {
            return false;
        };

        match field {
            Field::Id => expected.as_u64() == Some(self.id.0),
            Field::Price => expected.as_f64() == Some(self.price),
            Field::Date => match expected.as_str() {
                Some(s) => parse_date(s) == Some(self.date),
                None => false,
            },
            Field::Product => expected.as_str() == Some(self.product.as_str()),
            Field::Category => expected.as_str() == Some(self.category.as_str()),
            Field::Vendor => expected.as_str() == Some(self.vendor.as_str()),
        }
    }
}
