// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Immutable event values

use crate::clock::{Clock, SystemClock};
use crate::id::{EventId, IdGen, UuidIdGen};
use crate::payload::Payload;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::hash::{Hash, Hasher};

/// Well-known event names
pub mod kinds {
    pub const USER_REGISTERED: &str = "user:registered";
    pub const USER_LOGIN: &str = "user:login";
    pub const ORDER_PLACED: &str = "order:placed";
    pub const PAYMENT_RECEIVED: &str = "payment:received";
    pub const ERROR_OCCURRED: &str = "error:occurred";
}

/// Something that happened
///
/// Fields are fixed at construction and only readable afterwards. Identity
/// is the `id`: two events with the same name and payload are still
/// different events.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    id: EventId,
    name: String,
    actor: Option<String>,
    payload: Payload,
    timestamp: DateTime<Utc>,
}

impl Event {
    /// Create an event stamped with the system clock and a fresh UUID
    pub fn new(name: impl Into<String>, payload: Payload) -> Self {
        Self::builder(name).payload(payload).build()
    }

    pub fn builder(name: impl Into<String>) -> EventBuilder {
        EventBuilder {
            name: name.into(),
            actor: None,
            payload: Payload::new(),
        }
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Who caused the event, if anyone in particular
    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Collects the parts of an event before it is stamped
#[derive(Debug, Clone)]
pub struct EventBuilder {
    name: String,
    actor: Option<String>,
    payload: Payload,
}

impl EventBuilder {
    pub fn actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Replace the whole payload
    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload = self.payload.with(key, value);
        self
    }

    pub fn build(self) -> Event {
        self.build_with(&SystemClock, &UuidIdGen)
    }

    /// Stamp the event with the given time and id sources
    pub fn build_with(self, clock: &impl Clock, ids: &impl IdGen) -> Event {
        Event {
            id: ids.next_id(),
            name: self.name,
            actor: self.actor,
            payload: self.payload,
            timestamp: clock.now(),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
