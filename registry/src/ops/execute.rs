use tracing::debug;

use crate::errors::{RegistryError, Result};
use crate::events::RegistryEvent;
use crate::registry::Registry;
use crate::state::AgentId;
use crate::utils::{self, Digest};

impl Registry {
    /// Simulate running the agent over `payload`.
    ///
    /// Requires the agent to exist and be active; any caller may invoke
    /// it, so no ownership check applies. Stored state is untouched.
    ///
    /// The result fingerprint mixes a per-invocation nonce and a
    /// monotonic timestamp from the environment, standing in for real
    /// non-deterministic computation. It carries no reproducibility or
    /// verifiability guarantee.
    pub fn execute(&self, id: AgentId, payload: &[u8]) -> Result<Digest> {
        let agent = self.record(id)?;
        if !agent.active {
            return Err(RegistryError::Inactive(id));
        }

        let nonce = self.env().nonce();
        let timestamp = self.env().timestamp_nanos();
        let result = utils::execution_digest(id, payload, &nonce, timestamp);

        debug!(id, result = %result, "execution simulated");
        self.emit(RegistryEvent::Executed {
            id,
            payload: payload.to_vec(),
            result,
        });

        Ok(result)
    }

    /// Whether `id` currently accepts execution requests.
    pub fn is_active(&self, id: AgentId) -> Result<bool> {
        Ok(self.record(id)?.active)
    }
}
