use super::Value;

use indexmap::IndexMap;

/// A record with named fields, kept in insertion order.
///
/// Source rows are turned into records before mapping, and the mapping engine
/// hands the reshaped fields to a model's loader as a record keyed by the
/// model's own field names.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Record {
        Record::default()
    }

    pub fn with_capacity(capacity: usize) -> Record {
        Record {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    /// Builder-style [`insert`](Record::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Record {
        self.insert(name, value);
        self
    }

    /// Sets a field, replacing any previous value under the same name while
    /// keeping its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns the stored field name together with its value.
    pub fn get_entry(&self, name: &str) -> Option<(&str, &Value)> {
        self.fields
            .get_key_value(name)
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Moves a field's value out of the record, leaving `Null` behind.
    /// Missing fields also yield `Null`.
    pub fn take(&mut self, name: &str) -> Value {
        self.fields
            .get_mut(name)
            .map(Value::take)
            .unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
