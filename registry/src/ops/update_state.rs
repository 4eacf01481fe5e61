use tracing::debug;

use crate::errors::Result;
use crate::events::RegistryEvent;
use crate::registry::Registry;
use crate::state::{AgentId, Identity};
use crate::utils::{self, Digest};

impl Registry {
    /// Store the SHA-256 fingerprint of `raw_payload` as the agent's
    /// state snapshot. Owner-gated.
    ///
    /// The payload itself is discarded: the registry keeps only the
    /// digest and never interprets the bytes. Returns the stored
    /// fingerprint.
    pub fn update_state(
        &mut self,
        id: AgentId,
        raw_payload: &[u8],
        caller: Identity,
    ) -> Result<Digest> {
        let agent = self.authorized_mut(id, caller)?;
        let fingerprint = utils::payload_digest(raw_payload);
        agent.state_fingerprint = fingerprint;

        debug!(id, fingerprint = %fingerprint, "state fingerprint updated");
        self.emit(RegistryEvent::StateUpdated {
            id,
            state_fingerprint: fingerprint,
        });

        Ok(fingerprint)
    }
}
