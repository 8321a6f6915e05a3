//! Response header mapping and security/caching classification.

mod classify;

pub use classify::{
    caching_headers, security_headers, select, CACHING_HEADER_KEYS, SECURITY_HEADER_KEYS,
};

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Case-preserving header mapping with case-insensitive lookup.
///
/// Entries keep the order and casing in which they were first received.
/// Repeated fields are folded into one entry (see [`HeaderFields::append`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    entries: Vec<(String, String)>,
}

impl HeaderFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field. If a field with the same name (ignoring ASCII case)
    /// already exists, the value is appended to it with `", "` and the
    /// first-seen casing of the name is kept.
    pub fn append(&mut self, name: &str, value: &str) {
        match self.position(name) {
            Some(i) => {
                let existing = &mut self.entries[i].1;
                existing.push_str(", ");
                existing.push_str(value);
            }
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Value for `name`, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_entry(name).map(|(_, v)| v)
    }

    /// `(received name, value)` for `name`, ignoring ASCII case.
    pub fn get_entry(&self, name: &str) -> Option<(&str, &str)> {
        self.position(name)
            .map(|i| (self.entries[i].0.as_str(), self.entries[i].1.as_str()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` in received order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries sorted by lowercased name; ties keep received order.
    pub fn sorted_case_insensitive(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = self.iter().collect();
        out.sort_by_cached_key(|(k, _)| k.to_ascii_lowercase());
        out
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for HeaderFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = HeaderFields::new();
        for (k, v) in iter {
            fields.append(k.as_ref(), v.as_ref());
        }
        fields
    }
}

/// Serializes as a JSON object in received order.
impl Serialize for HeaderFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
