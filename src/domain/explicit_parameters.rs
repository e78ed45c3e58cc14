use std::collections::BTreeMap;

use crate::domain::ParameterKey;

/// Values the user supplied up front, keyed by parameter.
///
/// Blank entries mean "let the model decide" and are reported as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitParameters {
    values: BTreeMap<ParameterKey, String>,
}

impl ExplicitParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value; `None` leaves the key unset.
    pub fn set(&mut self, key: ParameterKey, value: Option<String>) {
        match value {
            Some(value) => {
                self.values.insert(key, value);
            }
            None => {
                self.values.remove(&key);
            }
        }
    }

    pub fn with(mut self, key: ParameterKey, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// The user's value for `key`, unless it is missing or whitespace-only.
    pub fn get(&self, key: ParameterKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str).filter(|value| !value.trim().is_empty())
    }

    /// Number of keys that will be taken verbatim.
    pub fn provided_count(&self) -> usize {
        ParameterKey::ALL.iter().filter(|key| self.get(**key).is_some()).count()
    }
}
