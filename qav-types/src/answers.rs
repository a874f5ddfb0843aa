use std::collections::HashMap;

use crate::AnswerValue;

/// Error type for typed answer access.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for key: {0}")]
    MissingKey(String),

    #[error("Type mismatch at key '{key}': expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Accepted answers, keyed by answer key.
///
/// One table is threaded through a whole run: every question sees the answers
/// given before it, both for prompt substitution and for choice filtering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerTable {
    values: HashMap<String, AnswerValue>,
}

impl AnswerTable {
    /// Create a new empty answer table.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer under the given key, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get the answer stored under the given key.
    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.values.get(key)
    }

    /// Check if an answer exists under the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remove the answer stored under the given key.
    pub fn remove(&mut self, key: &str) -> Option<AnswerValue> {
        self.values.remove(key)
    }

    /// Get an iterator over all key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another table into this one. Keys present in `other` win.
    pub fn extend(&mut self, other: AnswerTable) {
        self.values.extend(other.values);
    }

    /// Return the union of this table and `other` without touching either.
    pub fn merged(&self, other: &AnswerTable) -> Self {
        let mut merged = self.clone();
        merged
            .values
            .extend(other.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    // === Convenience accessors ===

    /// Get a string answer.
    pub fn get_string(&self, key: &str) -> Result<&str, AnswerError> {
        match self.get(key) {
            Some(AnswerValue::String(s)) => Ok(s),
            Some(other) => Err(AnswerError::TypeMismatch {
                key: key.to_string(),
                expected: "String",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::MissingKey(key.to_string())),
        }
    }

    /// Get an integer answer.
    pub fn get_int(&self, key: &str) -> Result<i64, AnswerError> {
        match self.get(key) {
            Some(AnswerValue::Int(i)) => Ok(*i),
            Some(other) => Err(AnswerError::TypeMismatch {
                key: key.to_string(),
                expected: "Int",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::MissingKey(key.to_string())),
        }
    }

    /// Get the answers of a question asked in multiple mode.
    pub fn get_list(&self, key: &str) -> Result<&[AnswerValue], AnswerError> {
        match self.get(key) {
            Some(AnswerValue::List(values)) => Ok(values),
            Some(other) => Err(AnswerError::TypeMismatch {
                key: key.to_string(),
                expected: "List",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::MissingKey(key.to_string())),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerTable
where
    K: Into<String>,
    V: Into<AnswerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for AnswerTable {
    type Item = (String, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnswerTable {
    type Item = (&'a String, &'a AnswerValue);
    type IntoIter = std::collections::hash_map::Iter<'a, String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
