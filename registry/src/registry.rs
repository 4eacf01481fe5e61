use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::env::{ExecutionEnv, SystemEnv};
use crate::errors::{RegistryError, Result};
use crate::events::{EventSink, NullSink, RegistryEvent};
use crate::state::{Agent, AgentId, Identity};

/// The registry: an identifier allocator plus the id -> [`Agent`] map.
///
/// Construct one instance and hand it to whatever harness or transport
/// drives it. Mutations take `&mut self` and reads `&self`, so each
/// operation completes atomically with respect to the map and the
/// allocator; an embedding that shares the registry across threads wraps
/// it in a `Mutex`/`RwLock`, which serializes mutating operations per
/// the same rule and keeps id allocation gap-free.
pub struct Registry {
    next_id: AgentId,
    records: HashMap<AgentId, Agent>,
    sink: Arc<dyn EventSink>,
    env: Arc<dyn ExecutionEnv>,
}

impl Registry {
    /// Empty registry with a [`NullSink`] and the system clock/entropy
    /// source. Replace either with the builder methods.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            records: HashMap::new(),
            sink: Arc::new(NullSink),
            env: Arc::new(SystemEnv::new()),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_env(mut self, env: Arc<dyn ExecutionEnv>) -> Self {
        self.env = env;
        self
    }

    /// Point-in-time copy of the allocator and every record, for callers
    /// that persist registry state across restarts.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            next_id: self.next_id,
            records: self.records.clone(),
        }
    }

    /// Rebuild a registry from a snapshot. Issued identifiers stay
    /// retired: the next registration continues from the snapshot's
    /// allocator. Sink and env default as in [`Registry::new`].
    pub fn restore(snapshot: RegistrySnapshot) -> Self {
        Self {
            next_id: snapshot.next_id,
            records: snapshot.records,
            sink: Arc::new(NullSink),
            env: Arc::new(SystemEnv::new()),
        }
    }

    /// Pre-incremented allocation: the first issued id is 1, leaving 0
    /// as the not-found sentinel.
    pub(crate) fn allocate_id(&mut self) -> AgentId {
        self.next_id += 1;
        self.next_id
    }

    pub(crate) fn issued(&self) -> u64 {
        self.next_id
    }

    pub(crate) fn insert(&mut self, id: AgentId, agent: Agent) {
        self.records.insert(id, agent);
    }

    pub(crate) fn record(&self, id: AgentId) -> Result<&Agent> {
        self.records.get(&id).ok_or(RegistryError::NotFound(id))
    }

    /// Shared precondition for every owner-gated mutation: the record
    /// must exist and the caller must be its owner. Existence is checked
    /// first so NotFound and NotOwner stay distinguishable.
    pub(crate) fn authorized_mut(&mut self, id: AgentId, caller: Identity) -> Result<&mut Agent> {
        let agent = self
            .records
            .get_mut(&id)
            .ok_or(RegistryError::NotFound(id))?;
        if agent.owner != caller {
            return Err(RegistryError::NotOwner { id, caller });
        }
        Ok(agent)
    }

    /// Best-effort notification. A sink failure is logged and never
    /// rolls back the in-memory change it accompanies.
    pub(crate) fn emit(&self, event: RegistryEvent) {
        if let Err(err) = self.sink.publish(event) {
            warn!(error = %err, "event sink rejected notification");
        }
    }

    pub(crate) fn env(&self) -> &dyn ExecutionEnv {
        self.env.as_ref()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("next_id", &self.next_id)
            .field("records", &self.records.len())
            .finish()
    }
}

/// Serializable copy of the registry's durable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub next_id: AgentId,
    pub records: HashMap<AgentId, Agent>,
}
