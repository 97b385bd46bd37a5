// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event statistics observer

use herald_core::{Event, Observer, ObserverError};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// Counts events by name
///
/// Every reaction adds exactly one to the count for the event's name. The
/// live map never leaves the collector; readers get copies.
#[derive(Debug, Default)]
pub struct StatisticsCollector {
    counts: Mutex<BTreeMap<String, u64>>,
}

impl StatisticsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, u64>> {
        self.counts.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Copy of the current counts
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.lock().clone()
    }

    pub fn count(&self, name: &str) -> u64 {
        self.lock().get(name).copied().unwrap_or(0)
    }

    /// Events seen across all names
    pub fn total(&self) -> u64 {
        self.lock().values().sum()
    }

    pub fn report(&self) -> StatisticsReport {
        StatisticsReport {
            counts: self.snapshot(),
        }
    }
}

impl Observer for StatisticsCollector {
    fn react(&self, event: &Event) -> Result<(), ObserverError> {
        let mut counts = self.lock();
        let count = counts.entry(event.name().to_string()).or_insert(0);
        *count += 1;
        tracing::trace!(name = event.name(), count = *count, "counted");
        Ok(())
    }
}

/// Printable view of a statistics snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsReport {
    pub counts: BTreeMap<String, u64>,
}

impl fmt::Display for StatisticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Statistics Report ===")?;
        for (name, count) in &self.counts {
            writeln!(f, "  {}: {} times", name, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
