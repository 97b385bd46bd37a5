// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The observer capability
//!
//! Anything that implements [`Observer`] can be attached to an
//! [`EventManager`](crate::EventManager). Observers own their state; the
//! manager only holds a registration.

use crate::event::Event;
use thiserror::Error;

/// Why a single observer failed to react to a single event
#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("payload field missing: {0}")]
    MissingField(String),
    #[error("payload field {field} is not {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
    #[error("reaction failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("observer panicked: {0}")]
    Panicked(String),
}

impl ObserverError {
    /// Wrap any error as a failed reaction
    pub fn failed(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Failed(err.into())
    }
}

/// A reactor that is invoked with every event the manager dispatches
///
/// Implementations must ignore events they do not recognise rather than
/// fail. Returning `Err` (or panicking) only affects this observer; the
/// manager records the failure and carries on with the others.
pub trait Observer: Send + Sync {
    /// Short name used in failure records and logs
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// React to a dispatched event
    fn react(&self, event: &Event) -> Result<(), ObserverError>;
}
