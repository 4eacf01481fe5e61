use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

use crate::state::AgentId;

/// Domain tag mixed into execution result fingerprints.
const EXECUTION_TAG: &[u8] = b"AGENT_EXEC_V1";

/// Fixed-width SHA-256 output.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Initial state fingerprint of every registered agent.
    pub const ZERO: Digest = Digest([0u8; 32]);

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self)
    }
}

/// Fingerprint of an opaque state payload.
///
/// Deliberately the plain hash of the bytes, with no domain tag, so a
/// caller holding the payload can recompute the stored value.
pub fn payload_digest(payload: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(payload);
    Digest(hasher.finalize().into())
}

/// Result fingerprint for one simulated execution.
///
/// Mixes a per-invocation nonce and a monotonic timestamp so repeated
/// runs over the same payload produce different results. Carries no
/// reproducibility or verifiability guarantee.
pub fn execution_digest(
    id: AgentId,
    payload: &[u8],
    nonce: &[u8; 32],
    timestamp_nanos: u64,
) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(EXECUTION_TAG);
    hasher.update(&id.to_le_bytes());
    hasher.update(payload);
    hasher.update(nonce);
    hasher.update(&timestamp_nanos.to_le_bytes());
    Digest(hasher.finalize().into())
}
