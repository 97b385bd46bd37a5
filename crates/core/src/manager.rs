// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The event manager (subject)
//!
//! Keeps an ordered list of observer registrations and fans each event out
//! to them, one at a time, in attachment order. A failing observer never
//! stops the others: errors and panics are caught here and handed back to
//! the caller in a [`DispatchReport`].

use crate::clock::{Clock, SystemClock};
use crate::event::Event;
use crate::id::{IdGen, UuidIdGen};
use crate::observer::{Observer, ObserverError};
use crate::payload::Payload;
use crate::report::{DispatchReport, ObserverFailure};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// A non-owning handle to an attached observer
#[derive(Clone)]
struct Registration {
    name: String,
    handle: Weak<dyn Observer>,
}

impl Registration {
    fn is_live(&self) -> bool {
        self.handle.strong_count() > 0
    }

    /// Same allocation as `other`
    fn refers_to(&self, other: &Weak<dyn Observer>) -> bool {
        Weak::as_ptr(&self.handle).cast::<()>() == Weak::as_ptr(other).cast::<()>()
    }
}

/// Dispatches events to attached observers
///
/// The manager never owns an observer: `attach` keeps a weak handle, so the
/// observer lives exactly as long as whoever constructed it keeps it alive.
pub struct EventManager<C: Clock = SystemClock, I: IdGen = UuidIdGen> {
    observers: Mutex<Vec<Registration>>,
    clock: C,
    ids: I,
}

impl EventManager {
    pub fn new() -> Self {
        Self::with_sources(SystemClock, UuidIdGen)
    }
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, I: IdGen> EventManager<C, I> {
    /// Create a manager that stamps triggered events with the given sources
    pub fn with_sources(clock: C, ids: I) -> Self {
        Self {
            observers: Mutex::new(Vec::new()),
            clock,
            ids,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Registration>> {
        self.observers.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register an observer at the end of the sequence
    ///
    /// Returns false if it was already attached; its position is kept and it
    /// will still be notified once per event.
    pub fn attach<O: Observer + 'static>(&self, observer: &Arc<O>) -> bool {
        let handle: Weak<dyn Observer> = Arc::<O>::downgrade(observer);
        let mut observers = self.lock();
        observers.retain(Registration::is_live);

        if observers.iter().any(|r| r.refers_to(&handle)) {
            tracing::debug!(observer = observer.name(), "already attached");
            return false;
        }

        observers.push(Registration {
            name: observer.name().to_string(),
            handle,
        });
        tracing::debug!(
            observer = observer.name(),
            count = observers.len(),
            "attached"
        );
        true
    }

    /// Remove an observer, keeping the relative order of the rest
    ///
    /// Returns whether anything was removed.
    pub fn detach<O: Observer + 'static>(&self, observer: &Arc<O>) -> bool {
        let handle: Weak<dyn Observer> = Arc::<O>::downgrade(observer);
        let mut observers = self.lock();
        observers.retain(Registration::is_live);

        match observers.iter().position(|r| r.refers_to(&handle)) {
            Some(index) => {
                observers.remove(index);
                tracing::debug!(
                    observer = observer.name(),
                    count = observers.len(),
                    "detached"
                );
                true
            }
            None => {
                tracing::trace!(observer = observer.name(), "not attached");
                false
            }
        }
    }

    /// Deliver an event to every observer attached when the call starts
    ///
    /// Attach/detach calls made by observers while this runs only affect
    /// later notifications.
    pub fn notify(&self, event: &Event) -> DispatchReport {
        let snapshot = self.lock().clone();

        let span = tracing::debug_span!("notify", event = %event.id(), name = event.name());
        let _guard = span.enter();

        let mut report = DispatchReport::new(event.id().clone());

        for (index, registration) in snapshot.iter().enumerate() {
            let Some(observer) = registration.handle.upgrade() else {
                tracing::trace!(observer = %registration.name, "observer dropped, skipping");
                report.skipped += 1;
                continue;
            };

            let outcome = panic::catch_unwind(AssertUnwindSafe(|| observer.react(event)))
                .unwrap_or_else(|payload| Err(ObserverError::Panicked(panic_message(&*payload))));

            match outcome {
                Ok(()) => {
                    tracing::trace!(observer = observer.name(), "delivered");
                    report.delivered += 1;
                }
                Err(error) => {
                    tracing::warn!(
                        observer = observer.name(),
                        index,
                        error = %error,
                        "observer failed"
                    );
                    report.failures.push(ObserverFailure {
                        index,
                        observer: observer.name().to_string(),
                        event_id: event.id().clone(),
                        event_name: event.name().to_string(),
                        error,
                    });
                }
            }
        }

        tracing::debug!(
            delivered = report.delivered,
            failed = report.failures.len(),
            skipped = report.skipped,
            "dispatched"
        );
        report
    }

    /// Build an event stamped by this manager's sources and notify it
    pub fn trigger(
        &self,
        name: impl Into<String>,
        actor: impl Into<String>,
        payload: Payload,
    ) -> DispatchReport {
        let event = Event::builder(name)
            .actor(actor)
            .payload(payload)
            .build_with(&self.clock, &self.ids);
        tracing::info!(event = %event.id(), name = event.name(), "triggering");
        self.notify(&event)
    }

    /// Number of attached observers that are still alive
    pub fn len(&self) -> usize {
        self.lock().iter().filter(|r| r.is_live()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_attached<O: Observer + 'static>(&self, observer: &Arc<O>) -> bool {
        let handle: Weak<dyn Observer> = Arc::<O>::downgrade(observer);
        self.lock().iter().any(|r| r.refers_to(&handle))
    }

    /// Names of live observers in dispatch order
    pub fn observer_names(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|r| r.is_live())
            .map(|r| r.name.clone())
            .collect()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
