use crate::errors::Result;
use crate::registry::Registry;
use crate::state::{Agent, AgentId, Identity};

impl Registry {
    /// Read-only view of a registered agent.
    pub fn get_agent(&self, id: AgentId) -> Result<&Agent> {
        self.record(id)
    }

    /// Owner of a registered agent.
    pub fn owner_of(&self, id: AgentId) -> Result<Identity> {
        Ok(self.record(id)?.owner)
    }

    /// Count of identifiers ever issued. Monotonically non-decreasing
    /// and equal to the highest id issued so far.
    pub fn total_count(&self) -> u64 {
        self.issued()
    }
}
