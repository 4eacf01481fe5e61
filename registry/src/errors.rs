use thiserror::Error;

use crate::state::{AgentId, Identity};

/// Rejections surfaced by registry operations.
///
/// Every failure is terminal for the invoking call and leaves the
/// registry unchanged. The three kinds stay distinct so callers can tell
/// "does not exist" from "exists but not mine" from "exists, mine, but
/// paused".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("agent {0} not found")]
    NotFound(AgentId),
    #[error("caller {caller} does not own agent {id}")]
    NotOwner { id: AgentId, caller: Identity },
    #[error("agent {0} is inactive")]
    Inactive(AgentId),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
