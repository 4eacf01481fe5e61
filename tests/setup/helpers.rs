use std::sync::atomic::{AtomicU64, Ordering};

use agent_registry::{EventSink, ExecutionEnv, RegistryEvent, SinkError};

/// Sink that rejects every event, for best-effort delivery tests.
pub struct FailingSink;

impl EventSink for FailingSink {
    fn publish(&self, _event: RegistryEvent) -> Result<(), SinkError> {
        Err("sink offline".into())
    }
}

/// Environment whose timestamp and nonce advance by one per call, so
/// execution digests are fully predictable.
#[derive(Default)]
pub struct TickEnv {
    ticks: AtomicU64,
}

impl TickEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nonce_from_tick(tick: u64) -> [u8; 32] {
        let mut nonce = [0u8; 32];
        nonce[..8].copy_from_slice(&tick.to_le_bytes());
        nonce
    }
}

impl ExecutionEnv for TickEnv {
    fn timestamp_nanos(&self) -> u64 {
        self.ticks.fetch_add(1, Ordering::Relaxed)
    }

    fn nonce(&self) -> [u8; 32] {
        Self::nonce_from_tick(self.ticks.fetch_add(1, Ordering::Relaxed))
    }
}
