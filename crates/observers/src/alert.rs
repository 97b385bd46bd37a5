// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alert monitor observer

use herald_core::{kinds, Event, EventId, EventPattern, Observer, ObserverError};
use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// Fire when a numeric payload field of a matching event exceeds a limit
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdRule {
    pub pattern: EventPattern,
    pub field: String,
    pub threshold: f64,
}

impl ThresholdRule {
    pub fn new(pattern: impl Into<EventPattern>, field: impl Into<String>, threshold: f64) -> Self {
        Self {
            pattern: pattern.into(),
            field: field.into(),
            threshold,
        }
    }
}

impl Default for ThresholdRule {
    /// Payments above 1000
    fn default() -> Self {
        Self::new(kinds::PAYMENT_RECEIVED, "amount", 1000.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlertReason {
    ThresholdExceeded {
        field: String,
        value: f64,
        threshold: f64,
    },
    Critical {
        severity: String,
    },
}

impl fmt::Display for AlertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertReason::ThresholdExceeded {
                field,
                value,
                threshold,
            } => write!(f, "{} {} exceeds {}", field, value, threshold),
            AlertReason::Critical { severity } => write!(f, "critical event, severity {}", severity),
        }
    }
}

/// A raised alert
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub event_id: EventId,
    pub event_name: String,
    pub reason: AlertReason,
}

/// Raises alerts for critical events and for values over a threshold
///
/// For events matched by the threshold rule the field is mandatory: a
/// missing or non-numeric value is a reaction failure, not a silent pass.
#[derive(Debug)]
pub struct AlertMonitor {
    rule: ThresholdRule,
    critical: Vec<EventPattern>,
    alerts: Mutex<Vec<Alert>>,
}

impl AlertMonitor {
    pub fn new(rule: ThresholdRule) -> Self {
        Self {
            rule,
            critical: Vec::new(),
            alerts: Mutex::new(Vec::new()),
        }
    }

    /// Events that always raise an alert, regardless of payload
    pub fn with_critical(mut self, patterns: impl IntoIterator<Item = EventPattern>) -> Self {
        self.critical = patterns.into_iter().collect();
        self
    }

    pub fn threshold(&self) -> f64 {
        self.rule.threshold
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Alert>> {
        self.alerts.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Copy of all alerts raised so far
    pub fn alerts(&self) -> Vec<Alert> {
        self.lock().clone()
    }

    pub fn alert_count(&self) -> usize {
        self.lock().len()
    }

    fn raise(&self, event: &Event, reason: AlertReason) {
        tracing::warn!(
            target: "herald::alerts",
            event = %event.id(),
            name = event.name(),
            "ALERT: {}",
            reason
        );
        self.lock().push(Alert {
            event_id: event.id().clone(),
            event_name: event.name().to_string(),
            reason,
        });
    }
}

impl Default for AlertMonitor {
    fn default() -> Self {
        Self::new(ThresholdRule::default())
            .with_critical([EventPattern::new(kinds::ERROR_OCCURRED)])
    }
}

impl Observer for AlertMonitor {
    fn react(&self, event: &Event) -> Result<(), ObserverError> {
        if self.critical.iter().any(|p| p.matches(event.name())) {
            let severity = event.payload().get_str("severity").unwrap_or("low");
            self.raise(
                event,
                AlertReason::Critical {
                    severity: severity.to_string(),
                },
            );
        }

        if self.rule.pattern.matches(event.name()) {
            let value = event.payload().require_f64(&self.rule.field)?;
            if value > self.rule.threshold {
                self.raise(
                    event,
                    AlertReason::ThresholdExceeded {
                        field: self.rule.field.clone(),
                        value,
                        threshold: self.rule.threshold,
                    },
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "alert_tests.rs"]
mod tests;
