//! End-to-end scenario
//!
//! Registration, login, order, payment and an outage go through the default
//! composition; the notifier is then detached and one more login follows.

use crate::prelude::*;

#[test]
fn default_composition_handles_a_user_session() {
    let adapter = FakeNotifyAdapter::new();
    let manager = EventManager::with_sources(FakeClock::new(), SequentialIdGen::new("evt"));
    let system = compose_with(&ObserversConfig::default(), adapter.clone(), manager);
    let manager = system.manager();

    let reports = vec![
        manager.trigger(
            "user:registered",
            "user_001",
            Payload::new().with("email", "alice@example.com"),
        ),
        manager.trigger("user:login", "user_001", Payload::new().with("ip", "192.168.1.1")),
        manager.trigger(
            "order:placed",
            "user_001",
            Payload::new().with("order_id", "ORD123").with("items", 3),
        ),
        manager.trigger(
            "payment:received",
            "user_001",
            Payload::new().with("amount", 1500).with("method", "credit_card"),
        ),
        manager.trigger(
            "error:occurred",
            "system",
            Payload::new()
                .with("severity", "high")
                .with("message", "Database connection failed"),
        ),
    ];
    assert!(reports.iter().all(|r| r.is_clean() && r.delivered == 4));

    let notifier = system.notifier().unwrap();
    assert!(manager.detach(notifier));
    let last = manager.trigger("user:login", "user_002", Payload::new().with("ip", "192.168.1.2"));
    assert_eq!(last.delivered, 3);
    assert_eq!(last.event_id, "evt-6");

    let titles: Vec<String> = adapter
        .calls()
        .into_iter()
        .map(|c| c.notification.title)
        .collect();
    assert_eq!(titles, ["User Registered", "Order Placed", "Error Occurred"]);

    assert_eq!(system.alerts().alert_count(), 2);

    similar_asserts::assert_eq!(
        system.stats().report().to_string(),
        "=== Statistics Report ===\n\
         \x20 error:occurred: 1 times\n\
         \x20 order:placed: 1 times\n\
         \x20 payment:received: 1 times\n\
         \x20 user:login: 2 times\n\
         \x20 user:registered: 1 times\n"
    );
}
