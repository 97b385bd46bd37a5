//! Shared helpers for specs

#![allow(dead_code)]

pub use herald_core::{
    Event, EventManager, FakeClock, Observer, ObserverError, Payload, SequentialIdGen,
};
pub use herald_observers::{
    compose, compose_with, AlertMonitor, FakeNotifyAdapter, ObserversConfig, StatisticsCollector,
    ThresholdRule,
};
pub use std::sync::{Arc, Mutex};

/// Order in which observers reacted, as "label:event" entries
#[derive(Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn record(&self, entry: String) {
        self.entries.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

/// Observer that appends to a shared call log
pub struct Probe {
    pub label: &'static str,
    pub log: CallLog,
}

impl Probe {
    pub fn new(label: &'static str, log: &CallLog) -> Arc<Self> {
        Arc::new(Self {
            label,
            log: log.clone(),
        })
    }
}

impl Observer for Probe {
    fn name(&self) -> &str {
        self.label
    }

    fn react(&self, event: &Event) -> Result<(), ObserverError> {
        self.log.record(format!("{}:{}", self.label, event.name()));
        Ok(())
    }
}

/// Observer that fails on every event
pub struct AlwaysFails;

impl Observer for AlwaysFails {
    fn react(&self, _event: &Event) -> Result<(), ObserverError> {
        Err(ObserverError::failed("always fails"))
    }
}

pub fn event(name: &str) -> Event {
    Event::new(name, Payload::new())
}
