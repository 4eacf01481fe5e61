use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::state::{AgentId, Identity};
use crate::utils::Digest;

/// Notification emitted after each successful operation, in operation
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegistryEvent {
    Registered {
        id: AgentId,
        owner: Identity,
        capability_ref: String,
    },
    CapabilityUpdated {
        id: AgentId,
        capability_ref: String,
    },
    StateUpdated {
        id: AgentId,
        state_fingerprint: Digest,
    },
    StatusChanged {
        id: AgentId,
        active: bool,
    },
    Executed {
        id: AgentId,
        payload: Vec<u8>,
        result: Digest,
    },
}

pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Boundary for delivering notifications to external observers.
///
/// Delivery is best-effort: the registry logs a failed publish and the
/// originating operation still succeeds. Correctness never depends on
/// anyone consuming the events.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: RegistryEvent) -> std::result::Result<(), SinkError>;
}

/// Append-only, ordered in-memory event log.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Mutex<Vec<RegistryEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every event published so far, oldest first.
    pub fn entries(&self) -> Vec<RegistryEvent> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for EventLog {
    fn publish(&self, event: RegistryEvent) -> std::result::Result<(), SinkError> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
        Ok(())
    }
}

/// Sink that drops every event.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&self, _event: RegistryEvent) -> std::result::Result<(), SinkError> {
        Ok(())
    }
}
