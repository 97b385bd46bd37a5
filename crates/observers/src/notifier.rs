// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notifier observer
//!
//! Maps events to notifications based on pattern matching rules and hands
//! them to a [`NotifyAdapter`].

use crate::notify::{Notification, NotifyAdapter, NotifyUrgency};
use herald_core::{kinds, Event, EventPattern, Observer, ObserverError};

/// A rule mapping an event pattern to a notification
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyRule {
    pub pattern: EventPattern,
    pub urgency: NotifyUrgency,
    /// If true, send a notification. If false, suppress.
    pub enabled: bool,
}

/// Sends a notification for each event matched by its rules
///
/// Rules are checked in order and the first match decides. Events matching
/// no rule are ignored.
pub struct Notifier<A> {
    rules: Vec<NotifyRule>,
    adapter: A,
}

impl<A: NotifyAdapter> Notifier<A> {
    /// A notifier with no rules; add them with [`Notifier::rule`]
    pub fn new(adapter: A) -> Self {
        Self {
            rules: Vec::new(),
            adapter,
        }
    }

    /// Notify on user registration, placed orders, and errors
    pub fn with_default_rules(adapter: A) -> Self {
        Self::new(adapter)
            .rule(kinds::USER_REGISTERED, NotifyUrgency::Normal, true)
            .rule(kinds::ORDER_PLACED, NotifyUrgency::Important, true)
            .rule(kinds::ERROR_OCCURRED, NotifyUrgency::Critical, true)
    }

    /// Append a rule
    pub fn rule(
        mut self,
        pattern: impl Into<EventPattern>,
        urgency: NotifyUrgency,
        enabled: bool,
    ) -> Self {
        self.rules.push(NotifyRule {
            pattern: pattern.into(),
            urgency,
            enabled,
        });
        self
    }

    pub fn rules(&self) -> &[NotifyRule] {
        &self.rules
    }

    /// Check if an event should trigger a notification
    pub fn should_notify(&self, event: &Event) -> Option<NotifyUrgency> {
        let rule = self.rules.iter().find(|r| r.pattern.matches(event.name()))?;
        rule.enabled.then_some(rule.urgency)
    }

    /// Convert an event to a notification if configured
    pub fn to_notification(&self, event: &Event) -> Option<Notification> {
        let urgency = self.should_notify(event)?;
        Some(event_to_notification(event, urgency))
    }
}

impl<A: NotifyAdapter> Observer for Notifier<A> {
    fn react(&self, event: &Event) -> Result<(), ObserverError> {
        let Some(notification) = self.to_notification(event) else {
            return Ok(());
        };

        tracing::debug!(event = %event.id(), title = %notification.title, "sending notification");
        self.adapter.send(&notification).map_err(ObserverError::failed)
    }
}

/// Convert an event to a notification
fn event_to_notification(event: &Event, urgency: NotifyUrgency) -> Notification {
    let notification = match event.name() {
        kinds::USER_REGISTERED => Notification::new(
            "User Registered",
            format!("Welcome aboard, {}", event.actor().unwrap_or("new user")),
        ),
        kinds::ORDER_PLACED => Notification::new(
            "Order Placed",
            match event.payload().get_str("order_id") {
                Some(order) => format!("Order {} received", order),
                None => "Order received".to_string(),
            },
        ),
        kinds::ERROR_OCCURRED => Notification::new(
            "Error Occurred",
            event
                .payload()
                .get_str("message")
                .unwrap_or("unspecified error")
                .to_string(),
        ),
        // Default: use event name as title
        other => Notification::new(
            other.replace(':', " ").to_uppercase(),
            format!("{} ({})", other, event.id()),
        ),
    };

    let notification = notification.with_urgency(urgency);
    match event.actor() {
        Some(actor) => notification.with_subtitle(actor),
        None => notification,
    }
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod tests;
