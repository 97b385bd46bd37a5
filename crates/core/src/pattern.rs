// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event name pattern matching

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pattern for matching event names
/// Supports:
///   - Exact: "payment:received"
///   - Single wildcard: "user:*" matches "user:login", "user:registered"
///   - Category: "order:**" matches all order events
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventPattern(String);

impl EventPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Check if this pattern matches an event name
    pub fn matches(&self, event_name: &str) -> bool {
        // Empty pattern matches nothing
        if self.0.is_empty() {
            return false;
        }

        if self.0 == "*" || self.0 == "**" {
            return true;
        }

        let pattern_parts: Vec<&str> = self.0.split(':').collect();
        let event_parts: Vec<&str> = event_name.split(':').collect();

        Self::match_segments(&pattern_parts, &event_parts)
    }

    fn match_segments(pattern: &[&str], event: &[&str]) -> bool {
        match (pattern.first(), event.first()) {
            (None, None) => true,
            (Some(&"**"), _) => true, // ** matches everything remaining
            (Some(&"*"), Some(_)) => Self::match_segments(&pattern[1..], &event[1..]),
            (Some(p), Some(e)) if *p == *e => Self::match_segments(&pattern[1..], &event[1..]),
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EventPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventPattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
