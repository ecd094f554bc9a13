//! Flat key-value records handed to the output sinks.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::config::LIST_DELIMITER;

/// A single value in a flat record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Field absent in the source.
    Null,
    /// Plain text value.
    Text(String),
    /// Ordered list of text values.
    List(Vec<String>),
    /// Boolean flag.
    Flag(bool),
}

impl FieldValue {
    /// Render the value as a single table cell.
    ///
    /// Null becomes an empty cell, lists are joined with `;` and flags are
    /// written as `True`/`False`.
    #[must_use]
    pub fn to_cell(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Text(s) => s.clone(),
            Self::List(items) => items.join(LIST_DELIMITER),
            Self::Flag(true) => "True".to_string(),
            Self::Flag(false) => "False".to_string(),
        }
    }

    /// Check if the value is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Text)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// An ordered mapping from field name to value.
///
/// Keys keep their insertion order so that every record of one entity type
/// serializes with identical columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field.
    ///
    /// An existing key keeps its position and gets the new value; a new key
    /// is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Merge another record over this one, key by key.
    pub fn merge(&mut self, other: Record) {
        for (key, value) in other.fields {
            self.insert(key, value);
        }
    }

    /// Get a field value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterate over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over values in key order.
    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter().map(|(_, v)| v)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
