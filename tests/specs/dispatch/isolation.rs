//! Failure isolation specs
//!
//! One failing observer never silences the others or reaches the caller.

use crate::prelude::*;

struct Explodes;

impl Observer for Explodes {
    fn react(&self, _event: &Event) -> Result<(), ObserverError> {
        panic!("boom");
    }
}

#[test]
fn failing_observer_does_not_block_later_observers() {
    let log = CallLog::default();
    let manager = EventManager::new();
    let failing = Arc::new(AlwaysFails);
    let b = Probe::new("B", &log);
    manager.attach(&failing);
    manager.attach(&b);

    let e = event("login");
    let report = manager.notify(&e);

    assert_eq!(log.entries(), vec!["B:login"]);
    assert_eq!(report.delivered, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].observer, "AlwaysFails");
    assert_eq!(&report.failures[0].event_id, e.id());
}

#[test]
fn panicking_observer_is_recorded_not_propagated() {
    let log = CallLog::default();
    let manager = EventManager::new();
    let explodes = Arc::new(Explodes);
    let b = Probe::new("B", &log);
    manager.attach(&explodes);
    manager.attach(&b);

    let report = manager.notify(&event("login"));

    assert_eq!(log.entries(), vec!["B:login"]);
    assert!(matches!(report.failures[0].error, ObserverError::Panicked(_)));
}

#[test]
fn malformed_payload_is_an_isolated_failure() {
    let log = CallLog::default();
    let manager = EventManager::new();
    let alerts = Arc::new(AlertMonitor::new(ThresholdRule::new("payment", "amount", 1000.0)));
    let b = Probe::new("B", &log);
    manager.attach(&alerts);
    manager.attach(&b);

    let report = manager.notify(&Event::new("payment", Payload::new().with("method", "card")));

    assert_eq!(report.failed_observers(), vec!["AlertMonitor"]);
    assert!(matches!(report.failures[0].error, ObserverError::MissingField(_)));
    assert_eq!(log.entries(), vec!["B:payment"]);
}

#[test]
fn two_monitors_failing_on_one_event_are_distinguishable() {
    let manager = EventManager::new();
    let strict = Arc::new(AlertMonitor::new(ThresholdRule::new("payment", "amount", 10.0)));
    let lenient = Arc::new(AlertMonitor::new(ThresholdRule::new("payment", "amount", 5000.0)));
    manager.attach(&strict);
    manager.attach(&lenient);

    let report = manager.notify(&Event::new("payment", Payload::new()));

    assert_eq!(report.failed_observers(), vec!["AlertMonitor", "AlertMonitor"]);
    let positions: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
    assert_eq!(positions, vec![0, 1]);
}
