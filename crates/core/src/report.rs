// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch outcome records

use crate::id::EventId;
use crate::observer::ObserverError;
use std::fmt;

/// One observer that did not react to one event
#[derive(Debug)]
pub struct ObserverFailure {
    /// Position in the dispatch order, telling apart observers that share a name
    pub index: usize,
    pub observer: String,
    pub event_id: EventId,
    pub event_name: String,
    pub error: ObserverError,
}

impl fmt::Display for ObserverFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (#{}) failed on {} ({}): {}",
            self.observer, self.index, self.event_name, self.event_id, self.error
        )
    }
}

/// What happened during a single `notify` call
#[derive(Debug)]
pub struct DispatchReport {
    pub event_id: EventId,
    /// Observers whose `react` returned `Ok`
    pub delivered: usize,
    /// Registrations whose observer had already been dropped
    pub skipped: usize,
    pub failures: Vec<ObserverFailure>,
}

impl DispatchReport {
    pub(crate) fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            delivered: 0,
            skipped: 0,
            failures: Vec::new(),
        }
    }

    /// True when every live observer reacted without error
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_observers(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.observer.as_str()).collect()
    }
}
