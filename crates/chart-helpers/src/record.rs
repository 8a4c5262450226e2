// File: crates/chart-helpers/src/record.rs
// Summary: Record model (field name -> number/text) and JSON loading.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::error::Result;
use crate::number::Num;

/// A single cell of a record.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value; text yields `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Number(_) => None,
            FieldValue::Text(s) => Some(s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self { FieldValue::Number(v) }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self { FieldValue::Number(v as f64) }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self { FieldValue::Number(v as f64) }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self { FieldValue::Text(v.to_owned()) }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self { FieldValue::Text(v) }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(v) => write!(f, "{}", Num(*v)),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// One data point: a mapping from field name to value.
/// A field missing from the map is absent; lookups return `None` for it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, Option<FieldValue>>")]
pub struct Record {
    values: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self { Self::default() }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.values.insert(field.into(), value.into())
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> { self.values.get(field) }

    /// Numeric value of `field`, if present and numeric.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_number)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> { self.values.keys().map(String::as_str) }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

impl From<BTreeMap<String, Option<FieldValue>>> for Record {
    fn from(map: BTreeMap<String, Option<FieldValue>>) -> Self {
        // null cells load as absent fields
        let values = map.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))).collect();
        Self { values }
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { values }
    }
}

/// Parse a JSON array of flat objects into records.
///
/// Values must be numbers, strings, or `null` (treated as absent). Nested
/// arrays/objects and booleans are rejected.
pub fn records_from_json(json: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    tracing::debug!(count = records.len(), "loaded records from json");
    Ok(records)
}
