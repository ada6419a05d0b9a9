use std::collections::BTreeMap;

use serde::Serialize;

/// Flat string parameters for a request: the query string of a GET, the form
/// body of any other verb.
///
/// Keys are kept sorted so encoding is deterministic. The `*_nonzero`,
/// `*_nonempty` and `set_some` setters implement the omission rule for
/// optional parameters: zero, empty and `None` values are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always send `key`.
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    /// Send `key` unless `value` is zero.
    pub fn set_nonzero(self, key: impl Into<String>, value: impl Into<u64>) -> Self {
        match value.into() {
            0 => self,
            n => self.set(key, n),
        }
    }

    /// Send `key` unless `value` is empty.
    pub fn set_nonempty(self, key: impl Into<String>, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.set(key, value)
        }
    }

    /// Send `key` only when a value is present.
    pub fn set_some<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
