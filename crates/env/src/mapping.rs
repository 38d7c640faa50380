use denv_core::{Error, Result};
use indexmap::IndexMap;
use serde::Serialize;

/// An ordered mapping from env key to optional value.
///
/// Keys keep the position of their first appearance; inserting an existing
/// key overwrites the value in place. A `None` value means the key was
/// declared without a value (`KEY` on its own line), which is distinct from
/// an empty string (`KEY=`).
///
/// Once resolved for a node the mapping is treated as immutable for the
/// rest of the build invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvMapping {
    entries: IndexMap<String, Option<String>>,
}

impl EnvMapping {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert a key, keeping the first occurrence's position on overwrite.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.entries.insert(key.into(), value);
    }

    /// Merge `other` into this mapping; its entries supersede key-by-key,
    /// new keys are appended in `other`'s order.
    pub fn merge(&mut self, other: &EnvMapping) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Whether the key is declared at all, with or without a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The declared value: outer `None` means undeclared, inner `None`
    /// means declared without a value.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries.get(key).map(|value| value.as_deref())
    }

    /// The value when the key is declared with one.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|value| value.as_deref())
    }

    /// Whether the key is declared with a non-null value.
    pub fn is_present(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// The value, or an error naming the key when it is absent or null.
    pub fn fetch(&self, key: &str) -> Result<&str> {
        self.value(key).ok_or_else(|| {
            Error::environment(
                key,
                "no value present; declare it in the env file or the process environment",
            )
        })
    }

    /// The value, or `default` when the key is absent or null.
    pub fn fetch_or_else<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.value(key).unwrap_or(default)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize back to env-file syntax: `KEY=VALUE` per line, a bare
    /// `KEY` line for null values.
    pub fn to_dotenv_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            match value {
                Some(value) => {
                    out.push_str(key);
                    out.push('=');
                    out.push_str(value);
                }
                None => out.push_str(key),
            }
            out.push('\n');
        }
        out
    }
}

impl FromIterator<(String, Option<String>)> for EnvMapping {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EnvMapping {
    type Item = (&'a String, &'a Option<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
