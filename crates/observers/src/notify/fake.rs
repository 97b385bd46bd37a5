// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake notification adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Notification, NotifyAdapter, NotifyError};
use std::sync::{Arc, Mutex};

/// Recorded notification
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyCall {
    pub notification: Notification,
}

/// Fake notification adapter for testing
#[derive(Clone, Default)]
pub struct FakeNotifyAdapter {
    calls: Arc<Mutex<Vec<NotifyCall>>>,
    failure: Option<NotifyError>,
}

impl FakeNotifyAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// An adapter whose every send is rejected with the given reason
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::erroring(NotifyError::Failed(reason.into()))
    }

    /// An adapter whose channel is never reachable
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::erroring(NotifyError::Unavailable(reason.into()))
    }

    fn erroring(error: NotifyError) -> Self {
        Self {
            calls: Arc::default(),
            failure: Some(error),
        }
    }

    /// Get all recorded notifications
    pub fn calls(&self) -> Vec<NotifyCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl NotifyAdapter for FakeNotifyAdapter {
    fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(NotifyCall {
                notification: notification.clone(),
            });
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
