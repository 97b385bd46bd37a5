// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console logger observer

use herald_core::{Event, Observer, ObserverError};

/// Writes one human-readable line per event to the `herald::events` target
#[derive(Debug, Clone, Default)]
pub struct Logger {
    include_payload: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also log the payload as JSON
    pub fn with_payload(mut self, include: bool) -> Self {
        self.include_payload = include;
        self
    }
}

impl Observer for Logger {
    fn react(&self, event: &Event) -> Result<(), ObserverError> {
        let time = event.timestamp().format("%H:%M:%S");
        let actor = event.actor().unwrap_or("-");

        if self.include_payload {
            let payload = serde_json::to_string(event.payload()).unwrap_or_default();
            tracing::info!(
                target: "herald::events",
                id = %event.id(),
                "{} - {} by {} {}",
                time,
                event.name(),
                actor,
                payload
            );
        } else {
            tracing::info!(
                target: "herald::events",
                id = %event.id(),
                "{} - {} by {}",
                time,
                event.name(),
                actor
            );
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
