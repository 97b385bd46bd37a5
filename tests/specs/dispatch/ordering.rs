//! Ordering and registration specs
//!
//! Observers are invoked in attachment order, once each.

use crate::prelude::*;

#[test]
fn observers_react_in_attachment_order_for_every_event() {
    let log = CallLog::default();
    let manager = EventManager::new();
    let (a, b, c) = (Probe::new("A", &log), Probe::new("B", &log), Probe::new("C", &log));
    manager.attach(&a);
    manager.attach(&b);
    manager.attach(&c);

    for name in ["login", "payment", "logout"] {
        manager.notify(&event(name));
    }

    let expected: Vec<String> = ["login", "payment", "logout"]
        .iter()
        .flat_map(|e| ["A", "B", "C"].map(|o| format!("{}:{}", o, e)))
        .collect();
    similar_asserts::assert_eq!(log.entries(), expected);
}

#[test]
fn attaching_twice_delivers_once() {
    let log = CallLog::default();
    let manager = EventManager::new();
    let a = Probe::new("A", &log);

    assert!(manager.attach(&a));
    assert!(!manager.attach(&a));
    manager.notify(&event("login"));

    assert_eq!(manager.len(), 1);
    assert_eq!(log.entries(), vec!["A:login"]);
}

#[test]
fn detach_removes_only_that_observer() {
    let log = CallLog::default();
    let manager = EventManager::new();
    let (a, b, c) = (Probe::new("A", &log), Probe::new("B", &log), Probe::new("C", &log));
    manager.attach(&a);
    manager.attach(&b);
    manager.attach(&c);

    assert!(manager.detach(&b));
    assert!(!manager.detach(&b));
    manager.notify(&event("login"));

    assert_eq!(log.entries(), vec!["A:login", "C:login"]);
    assert_eq!(manager.observer_names(), vec!["A", "C"]);
}
