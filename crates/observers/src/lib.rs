// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! herald-observers: stock observers and their assembly
//!
//! - `Logger` writes a line per event
//! - `Notifier` turns selected events into notifications
//! - `StatisticsCollector` counts events by name
//! - `AlertMonitor` raises alerts on critical events and large values
//! - `compose` wires them to an `EventManager` from `ObserversConfig`

pub mod alert;
pub mod compose;
pub mod config;
pub mod logger;
pub mod notifier;
pub mod notify;
pub mod stats;

#[cfg(test)]
mod test_support;

pub use alert::{Alert, AlertMonitor, AlertReason, ThresholdRule};
pub use compose::{compose, compose_with, Composition};
pub use config::{
    AlertConfig, ConfigError, LoggerConfig, NotifierConfig, ObserversConfig, RuleConfig,
};
pub use logger::Logger;
pub use notifier::{Notifier, NotifyRule};
pub use notify::{
    LogNotifyAdapter, NoOpNotifyAdapter, Notification, NotifyAdapter, NotifyError, NotifyUrgency,
};
pub use stats::{StatisticsCollector, StatisticsReport};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifyAdapter, NotifyCall};
