//! Field/value record exchanged between the codec and its callers.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::registry::{self, FieldSpec};

/// One logged contact as a field-name to value mapping.
///
/// Keys are stored upper case, including keys read through serde. A record
/// carries no identity of its own; callers that persist records assign one.
/// Serializes as a flat JSON-style map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "HashMap<String, String>")]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, returning the previous value.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
        self.fields
            .insert(name.as_ref().to_ascii_uppercase(), value.into())
    }

    /// Looks up a value, ignoring the case of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .or_else(|| self.fields.get(&name.to_ascii_uppercase()))
            .map(String::as_str)
    }

    /// Removes a value, ignoring the case of `name`.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.remove(&name.to_ascii_uppercase())
    }

    /// Number of fields held.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields are held.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates registered fields present in the record, in canonical order.
    ///
    /// Fields unknown to the registry are skipped.
    pub fn iter_canonical(&self) -> impl Iterator<Item = (&'static FieldSpec, &str)> {
        registry::fields().filter_map(|spec| {
            self.fields
                .get(spec.name)
                .map(|value| (spec, value.as_str()))
        })
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl From<HashMap<String, String>> for Record {
    fn from(fields: HashMap<String, String>) -> Self {
        fields.into_iter().collect()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
