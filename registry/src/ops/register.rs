use tracing::debug;

use crate::events::RegistryEvent;
use crate::registry::Registry;
use crate::state::{Agent, AgentId, Identity};

impl Registry {
    /// Register a new agent owned by `caller`.
    ///
    /// Allocates the next identifier and stores an active record with
    /// the all-zero state fingerprint. The capability reference is kept
    /// as-is; the registry does not validate its format. Never fails.
    pub fn register(&mut self, capability_ref: impl Into<String>, caller: Identity) -> AgentId {
        let capability_ref = capability_ref.into();
        let id = self.allocate_id();
        self.insert(id, Agent::new(caller, capability_ref.clone()));

        debug!(id, owner = %caller, "agent registered");
        self.emit(RegistryEvent::Registered {
            id,
            owner: caller,
            capability_ref,
        });

        id
    }
}
