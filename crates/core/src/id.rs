// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event identifiers and the sources that mint them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identity of one event
///
/// Two events with equal names and payloads are still told apart by id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for EventId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EventId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Mints a fresh [`EventId`] for every event a manager stamps
pub trait IdGen: Send + Sync {
    fn next_id(&self) -> EventId;
}

/// Random v4 UUIDs
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next_id(&self) -> EventId {
        EventId(uuid::Uuid::new_v4().hyphenated().to_string())
    }
}

/// `prefix-N` ids counting up from a starting value
///
/// Clones share the counter, so a test can keep one handle and give
/// another to the manager without the two ever minting the same id.
#[derive(Clone, Debug)]
pub struct SequentialIdGen {
    prefix: Arc<str>,
    next: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: &str) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: &str, first: u64) -> Self {
        Self {
            prefix: Arc::from(prefix),
            next: Arc::new(AtomicU64::new(first)),
        }
    }

    /// The number the next id will carry
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("evt")
    }
}

impl IdGen for SequentialIdGen {
    fn next_id(&self) -> EventId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        EventId(format!("{}-{n}", self.prefix))
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
