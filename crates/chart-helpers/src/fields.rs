// File: crates/chart-helpers/src/fields.rs
// Summary: Field selectors and per-field extraction, grouping, and extrema over records.

use crate::record::{FieldValue, Record};

/// Ordered list of field names. A lone name is normalized to a one-element list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fields(Vec<String>);

impl Fields {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.0.iter().map(String::as_str) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl From<&str> for Fields {
    fn from(name: &str) -> Self { Self(vec![name.to_owned()]) }
}

impl From<String> for Fields {
    fn from(name: String) -> Self { Self(vec![name]) }
}

impl From<&[&str]> for Fields {
    fn from(names: &[&str]) -> Self { Self::new(names.iter().copied()) }
}

impl<const N: usize> From<[&str; N]> for Fields {
    fn from(names: [&str; N]) -> Self { Self::new(names) }
}

impl From<Vec<&str>> for Fields {
    fn from(names: Vec<&str>) -> Self { Self::new(names) }
}

impl From<Vec<String>> for Fields {
    fn from(names: Vec<String>) -> Self { Self(names) }
}

impl From<&Fields> for Fields {
    fn from(fields: &Fields) -> Self { fields.clone() }
}

/// Values of each field across all records, concatenated in field order.
///
/// Output length is `records.len() * fields.len()`; absent fields yield `None`.
pub fn by_fields<'a>(records: &'a [Record], fields: impl Into<Fields>) -> Vec<Option<&'a FieldValue>> {
    let fields: Fields = fields.into();
    let mut out = Vec::with_capacity(records.len() * fields.len());
    for field in fields.iter() {
        out.extend(records.iter().map(|r| r.get(field)));
    }
    out
}

/// Like [`by_fields`], but one inner vector per field instead of a flat list.
pub fn group_by_fields<'a>(records: &'a [Record], fields: impl Into<Fields>) -> Vec<Vec<Option<&'a FieldValue>>> {
    let fields: Fields = fields.into();
    fields
        .iter()
        .map(|field| records.iter().map(|r| r.get(field)).collect())
        .collect()
}

/// Smallest numeric value across `fields` of all records.
/// Absent, text, and NaN values are skipped; `None` if nothing numeric remains.
pub fn min_by_fields(records: &[Record], fields: impl Into<Fields>) -> Option<f64> {
    let fields: Fields = fields.into();
    let min = numeric_values(records, &fields).reduce(f64::min);
    if min.is_none() {
        tracing::trace!(records = records.len(), ?fields, "min_by_fields: no numeric values");
    }
    min
}

/// Largest numeric value across `fields` of all records. See [`min_by_fields`].
pub fn max_by_fields(records: &[Record], fields: impl Into<Fields>) -> Option<f64> {
    let fields: Fields = fields.into();
    let max = numeric_values(records, &fields).reduce(f64::max);
    if max.is_none() {
        tracing::trace!(records = records.len(), ?fields, "max_by_fields: no numeric values");
    }
    max
}

/// Largest per-record sum of `fields` (the top of a stacked bar).
///
/// Absent and non-numeric cells add nothing to their record's sum. `None` only
/// for an empty record slice.
pub fn max_by_fields_stacked(records: &[Record], fields: impl Into<Fields>) -> Option<f64> {
    let fields: Fields = fields.into();
    records
        .iter()
        .map(|r| {
            fields
                .iter()
                .filter_map(|f| r.number(f))
                .filter(|v| !v.is_nan())
                .sum::<f64>()
        })
        .reduce(f64::max)
}

fn numeric_values<'a>(records: &'a [Record], fields: &'a Fields) -> impl Iterator<Item = f64> + 'a {
    fields
        .iter()
        .flat_map(move |f| records.iter().filter_map(move |r| r.number(f)))
        .filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_normalization() {
        assert_eq!(Fields::from("a"), Fields::from(["a"]));
        assert_eq!(Fields::from(vec!["a".to_string(), "b".to_string()]), Fields::from(["a", "b"]));
        assert_eq!(Fields::from(&["a", "b"][..]).len(), 2);
    }

    #[test]
    fn nan_is_not_an_extremum() {
        let records = vec![
            Record::new().with("a", f64::NAN),
            Record::new().with("a", 4),
            Record::new().with("a", -1),
        ];
        assert_eq!(min_by_fields(&records, "a"), Some(-1.0));
        assert_eq!(max_by_fields(&records, "a"), Some(4.0));
    }
}
