//! Statistics collector specs

use crate::prelude::*;
use std::collections::BTreeMap;

#[test]
fn counts_events_by_name() {
    let manager = EventManager::new();
    let stats = Arc::new(StatisticsCollector::new());
    manager.attach(&stats);

    manager.notify(&event("login"));
    manager.notify(&event("login"));
    manager.notify(&event("payment"));

    let expected = BTreeMap::from([("login".to_string(), 2), ("payment".to_string(), 1)]);
    assert_eq!(stats.snapshot(), expected);
}
