use tracing::debug;

use crate::errors::Result;
use crate::events::RegistryEvent;
use crate::registry::Registry;
use crate::state::{AgentId, Identity};

impl Registry {
    /// Replace the capability reference of `id`. Owner-gated.
    pub fn update_capability(
        &mut self,
        id: AgentId,
        new_ref: impl Into<String>,
        caller: Identity,
    ) -> Result<()> {
        let new_ref = new_ref.into();
        let agent = self.authorized_mut(id, caller)?;
        agent.capability_ref = new_ref.clone();

        debug!(id, "capability reference updated");
        self.emit(RegistryEvent::CapabilityUpdated {
            id,
            capability_ref: new_ref,
        });

        Ok(())
    }
}
