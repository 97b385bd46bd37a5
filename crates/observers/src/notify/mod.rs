// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification delivery adapters

#[cfg(any(test, feature = "test-support"))]
mod fake;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifyAdapter, NotifyCall};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotifyError {
    /// The channel took the notification and rejected it
    #[error("notification failed: {0}")]
    Failed(String),
    /// The channel could not be reached at all
    #[error("notification channel unavailable: {0}")]
    Unavailable(String),
}

/// Notification urgency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyUrgency {
    /// Informational
    #[default]
    Normal,
    /// Worth looking at soon
    Important,
    /// Needs attention now
    Critical,
}

/// A notification to deliver
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub subtitle: Option<String>,
    pub message: String,
    pub urgency: NotifyUrgency,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            message: message.into(),
            urgency: NotifyUrgency::Normal,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_urgency(mut self, urgency: NotifyUrgency) -> Self {
        self.urgency = urgency;
        self
    }
}

/// Adapter trait for notification delivery
///
/// Delivery is a quick synchronous call from the dispatcher's point of view;
/// retries and timeouts belong inside the adapter.
pub trait NotifyAdapter: Send + Sync + 'static {
    fn send(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Delivers notifications as log lines on the `herald::notify` target
#[derive(Clone, Debug, Default)]
pub struct LogNotifyAdapter;

impl NotifyAdapter for LogNotifyAdapter {
    fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        let to = notification.subtitle.as_deref().unwrap_or("-");
        match notification.urgency {
            NotifyUrgency::Normal => tracing::info!(
                target: "herald::notify",
                to,
                "{}: {}",
                notification.title,
                notification.message
            ),
            NotifyUrgency::Important | NotifyUrgency::Critical => tracing::warn!(
                target: "herald::notify",
                to,
                urgency = ?notification.urgency,
                "{}: {}",
                notification.title,
                notification.message
            ),
        }
        Ok(())
    }
}

/// Discards every notification
#[derive(Clone, Debug, Default)]
pub struct NoOpNotifyAdapter;

impl NotifyAdapter for NoOpNotifyAdapter {
    fn send(&self, _notification: &Notification) -> Result<(), NotifyError> {
        Ok(())
    }
}
