// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assembly of the default observer topology
//!
//! The composition root owns every observer; the manager it builds only
//! holds registrations. Dropping the [`Composition`] drops the observers.

use crate::alert::{AlertMonitor, ThresholdRule};
use crate::config::{AlertConfig, LoggerConfig, NotifierConfig, ObserversConfig};
use crate::logger::Logger;
use crate::notifier::Notifier;
use crate::notify::NotifyAdapter;
use crate::stats::StatisticsCollector;
use herald_core::{Clock, EventManager, IdGen, SystemClock, UuidIdGen};
use std::sync::Arc;

/// An event manager together with the observers attached to it
pub struct Composition<A, C: Clock = SystemClock, I: IdGen = UuidIdGen> {
    manager: EventManager<C, I>,
    logger: Arc<Logger>,
    notifier: Option<Arc<Notifier<A>>>,
    stats: Arc<StatisticsCollector>,
    alerts: Arc<AlertMonitor>,
}

impl<A: NotifyAdapter, C: Clock, I: IdGen> Composition<A, C, I> {
    pub fn manager(&self) -> &EventManager<C, I> {
        &self.manager
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// None when the notifier is disabled in config
    pub fn notifier(&self) -> Option<&Arc<Notifier<A>>> {
        self.notifier.as_ref()
    }

    pub fn stats(&self) -> &Arc<StatisticsCollector> {
        &self.stats
    }

    pub fn alerts(&self) -> &Arc<AlertMonitor> {
        &self.alerts
    }
}

/// Build the default topology: logger, notifier, statistics, alerts
pub fn compose<A: NotifyAdapter>(config: &ObserversConfig, adapter: A) -> Composition<A> {
    compose_with(config, adapter, EventManager::new())
}

/// Like [`compose`], attaching to a caller-supplied manager
pub fn compose_with<A, C, I>(
    config: &ObserversConfig,
    adapter: A,
    manager: EventManager<C, I>,
) -> Composition<A, C, I>
where
    A: NotifyAdapter,
    C: Clock,
    I: IdGen,
{
    let logger = Arc::new(build_logger(&config.logger));
    let notifier = config
        .notifier
        .enabled
        .then(|| Arc::new(build_notifier(&config.notifier, adapter)));
    let stats = Arc::new(StatisticsCollector::new());
    let alerts = Arc::new(build_alert_monitor(&config.alert));

    manager.attach(&logger);
    if let Some(notifier) = &notifier {
        manager.attach(notifier);
    }
    manager.attach(&stats);
    manager.attach(&alerts);

    tracing::info!(observers = ?manager.observer_names(), "composed event manager");

    Composition {
        manager,
        logger,
        notifier,
        stats,
        alerts,
    }
}

fn build_logger(config: &LoggerConfig) -> Logger {
    Logger::new().with_payload(config.payload)
}

fn build_notifier<A: NotifyAdapter>(config: &NotifierConfig, adapter: A) -> Notifier<A> {
    config
        .rules
        .iter()
        .fold(Notifier::new(adapter), |notifier, rule| {
            notifier.rule(rule.pattern.clone(), rule.urgency, rule.enabled)
        })
}

fn build_alert_monitor(config: &AlertConfig) -> AlertMonitor {
    AlertMonitor::new(ThresholdRule::new(
        config.pattern.clone(),
        config.field.clone(),
        config.threshold,
    ))
    .with_critical(config.critical.iter().cloned())
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
