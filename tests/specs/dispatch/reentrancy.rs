//! Re-entrant registration specs
//!
//! Dispatch runs over the observer list as it was when `notify` started.

use crate::prelude::*;

struct Recruiter {
    manager: Arc<EventManager>,
    recruit: Arc<Probe>,
}

impl Observer for Recruiter {
    fn react(&self, _event: &Event) -> Result<(), ObserverError> {
        self.manager.attach(&self.recruit);
        Ok(())
    }
}

struct Remover {
    manager: Arc<EventManager>,
    target: Arc<Probe>,
}

impl Observer for Remover {
    fn react(&self, _event: &Event) -> Result<(), ObserverError> {
        self.manager.detach(&self.target);
        Ok(())
    }
}

#[test]
fn observer_attached_mid_dispatch_waits_for_next_event() {
    let log = CallLog::default();
    let manager = Arc::new(EventManager::new());
    let d = Probe::new("D", &log);
    let recruiter = Arc::new(Recruiter {
        manager: Arc::clone(&manager),
        recruit: Arc::clone(&d),
    });
    manager.attach(&recruiter);

    manager.notify(&event("first"));
    assert!(log.entries().is_empty());

    manager.notify(&event("second"));
    assert_eq!(log.entries(), vec!["D:second"]);
}

#[test]
fn observer_detached_mid_dispatch_still_gets_in_flight_event() {
    let log = CallLog::default();
    let manager = Arc::new(EventManager::new());
    let c = Probe::new("C", &log);
    let remover = Arc::new(Remover {
        manager: Arc::clone(&manager),
        target: Arc::clone(&c),
    });
    manager.attach(&remover);
    manager.attach(&c);

    manager.notify(&event("first"));
    manager.notify(&event("second"));

    assert_eq!(log.entries(), vec!["C:first"]);
}
