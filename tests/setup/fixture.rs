use std::sync::Arc;

use agent_registry::{EventLog, Identity, Registry, RegistryEvent};

/// One registry wired to an in-memory event log, plus named principals.
pub struct TestFixture {
    pub registry: Registry,
    pub events: Arc<EventLog>,
    pub alice: Identity,
    pub bob: Identity,
}

impl TestFixture {
    pub fn new() -> Self {
        let events = Arc::new(EventLog::new());
        let registry = Registry::new().with_sink(events.clone());

        Self {
            registry,
            events,
            alice: Identity::generate(),
            bob: Identity::generate(),
        }
    }

    pub fn emitted(&self) -> Vec<RegistryEvent> {
        self.events.entries()
    }
}
