use tracing::debug;

use crate::errors::Result;
use crate::events::RegistryEvent;
use crate::registry::Registry;
use crate::state::{AgentId, Identity};

impl Registry {
    /// Set the activity gate. Owner-gated.
    ///
    /// Idempotent: storing the current value changes nothing observable
    /// except the notification, which is still emitted.
    pub fn set_active(&mut self, id: AgentId, active: bool, caller: Identity) -> Result<()> {
        let agent = self.authorized_mut(id, caller)?;
        agent.active = active;

        debug!(id, active, "activity flag set");
        self.emit(RegistryEvent::StatusChanged { id, active });

        Ok(())
    }
}
