// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only event payloads

use crate::observer::ObserverError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An opaque mapping from field name to value, agreed between producer and
/// observers out-of-band. Once built it is only ever read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field while building the payload
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Numeric field an observer cannot do without
    pub fn require_f64(&self, key: &str) -> Result<f64, ObserverError> {
        let value = self
            .get(key)
            .ok_or_else(|| ObserverError::MissingField(key.to_string()))?;
        value.as_f64().ok_or_else(|| ObserverError::InvalidField {
            field: key.to_string(),
            expected: "a number",
        })
    }

    /// String field an observer cannot do without
    pub fn require_str(&self, key: &str) -> Result<&str, ObserverError> {
        let value = self
            .get(key)
            .ok_or_else(|| ObserverError::MissingField(key.to_string()))?;
        value.as_str().ok_or_else(|| ObserverError::InvalidField {
            field: key.to_string(),
            expected: "a string",
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for Payload {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self(fields)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
