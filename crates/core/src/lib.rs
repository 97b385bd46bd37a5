// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! herald-core: in-process event notification
//!
//! This crate provides:
//! - `Event` values with read-only payloads
//! - The `Observer` capability
//! - `EventManager`, which fans events out to attached observers in order
//!   and isolates their failures
//! - Clock and id abstractions for deterministic tests

pub mod clock;
pub mod id;

pub mod event;
pub mod manager;
pub mod observer;
pub mod pattern;
pub mod payload;
pub mod report;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use event::{kinds, Event, EventBuilder};
pub use id::{EventId, IdGen, SequentialIdGen, UuidIdGen};
pub use manager::EventManager;
pub use observer::{Observer, ObserverError};
pub use pattern::EventPattern;
pub use payload::Payload;
pub use report::{DispatchReport, ObserverFailure};
