use std::time::Instant;

/// Clock and entropy supplied by the execution environment for
/// [`Registry::execute`](crate::Registry::execute).
///
/// Neither value needs to be cryptographically secure, only
/// non-repeating across invocations.
pub trait ExecutionEnv: Send + Sync {
    /// Monotonic timestamp in nanoseconds.
    fn timestamp_nanos(&self) -> u64;

    /// Unpredictable per-invocation value.
    fn nonce(&self) -> [u8; 32];
}

/// Process-local environment: a monotonic clock anchored at construction
/// plus thread-local randomness.
#[derive(Debug)]
pub struct SystemEnv {
    started: Instant,
}

impl SystemEnv {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionEnv for SystemEnv {
    fn timestamp_nanos(&self) -> u64 {
        self.started.elapsed().as_nanos() as u64
    }

    fn nonce(&self) -> [u8; 32] {
        rand::random()
    }
}
