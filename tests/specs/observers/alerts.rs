//! Alert monitor specs

use crate::prelude::*;

fn payment(amount: i64) -> Event {
    Event::new("payment", Payload::new().with("amount", amount))
}

#[test]
fn fires_once_above_threshold() {
    let manager = EventManager::new();
    let alerts = Arc::new(AlertMonitor::new(ThresholdRule::new("payment", "amount", 1000.0)));
    manager.attach(&alerts);

    manager.notify(&payment(1500));

    assert_eq!(alerts.alert_count(), 1);
}

#[test]
fn stays_quiet_below_threshold() {
    let manager = EventManager::new();
    let alerts = Arc::new(AlertMonitor::new(ThresholdRule::new("payment", "amount", 1000.0)));
    manager.attach(&alerts);

    manager.notify(&payment(500));

    assert_eq!(alerts.alert_count(), 0);
}
