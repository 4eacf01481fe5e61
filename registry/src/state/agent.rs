use serde::{Deserialize, Serialize};

use crate::state::Identity;
use crate::utils::Digest;

/// Identifier issued by the registry. The first issued id is 1; ids are
/// never reused.
pub type AgentId = u64;

/// Sentinel identifier. Never denotes a registered agent.
pub const RESERVED_AGENT_ID: AgentId = 0;

/// One record per registered identifier.
///
/// Created exactly once, mutated only by its owner, never deleted. The
/// record stays addressable and readable regardless of the activity
/// flag; only execution is gated by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Controlling principal. Set at registration; there is no transfer
    /// operation, so it never changes.
    pub owner: Identity,
    /// Opaque reference to an off-registry description of the agent's
    /// capabilities and policies. Stored as-is, never validated.
    pub capability_ref: String,
    /// Digest of the agent's last submitted state snapshot. All-zero
    /// until the owner submits one.
    pub state_fingerprint: Digest,
    /// Gate for execution requests.
    pub active: bool,
}

impl Agent {
    pub fn new(owner: Identity, capability_ref: String) -> Self {
        Self {
            owner,
            capability_ref,
            state_fingerprint: Digest::ZERO,
            active: true,
        }
    }
}
