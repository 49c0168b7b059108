//! Sample Module
//! Labeled input rows for the chart: field name -> numeric or text value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One field of a [`Sample`].
///
/// `Null` marks a missing point in a plotted series; whether the gap is
/// bridged or drawn as a break is the layer's `connect_nulls` policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Null,
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

/// A single labeled sample: field name to value.
///
/// A chart input is a sequence of samples; the sequence order defines the
/// x/time ordering and is preserved as given, never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sample {
    // BTreeMap keeps serialization deterministic across renders
    fields: BTreeMap<String, FieldValue>,
}

impl Sample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a numeric field.
    pub fn with_number(mut self, field: &str, value: f64) -> Self {
        self.fields
            .insert(field.to_string(), FieldValue::Number(value));
        self
    }

    /// Set a text field (label, timestamp, ...). Text fields are never plotted.
    pub fn with_text(mut self, field: &str, value: &str) -> Self {
        self.fields
            .insert(field.to_string(), FieldValue::Text(value.to_string()));
        self
    }

    /// Mark a field as a missing point.
    pub fn with_null(mut self, field: &str) -> Self {
        self.fields.insert(field.to_string(), FieldValue::Null);
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Numeric value of a field; `None` for text, null, and absent fields alike.
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.fields.get(field) {
            Some(FieldValue::Number(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for Sample {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Sample {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_ignores_text_null_and_absent_fields() {
        let sample = Sample::new()
            .with_number("value", 3.5)
            .with_text("month", "Jan")
            .with_null("other");

        assert_eq!(sample.number("value"), Some(3.5));
        assert_eq!(sample.number("month"), None);
        assert_eq!(sample.number("other"), None);
        assert_eq!(sample.number("missing"), None);
    }

    #[test]
    fn json_null_round_trips_as_missing_point() {
        let json = r#"{"month":"Feb","value":null}"#;
        let sample: Sample = serde_json::from_str(json).unwrap();

        assert_eq!(sample.get("value"), Some(&FieldValue::Null));
        assert_eq!(sample.number("value"), None);
        assert_eq!(serde_json::to_string(&sample).unwrap(), json);
    }
}
