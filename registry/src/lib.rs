//! Ownership-gated registry of agent records.
//!
//! Associates a numeric identifier with an owned, mutable [`Agent`]
//! record: an opaque capability reference, a SHA-256 state fingerprint,
//! and an activity flag. Supports registration, owner-gated updates,
//! status toggling, read-only lookups, and a simulated execution that
//! derives a non-reproducible result fingerprint from environment
//! entropy — a deliberate placeholder for real computation.
//!
//! The registry is synchronous and self-contained. Caller identity,
//! clock/entropy ([`ExecutionEnv`]), and notification delivery
//! ([`EventSink`]) are supplied by the embedding platform; persistence
//! goes through [`RegistrySnapshot`]. Share a registry across threads by
//! wrapping it in a `Mutex`/`RwLock` — mutations take `&mut self`, which
//! keeps every operation atomic and id allocation gap-free.

pub mod env;
pub mod errors;
pub mod events;
mod ops;
pub mod registry;
pub mod state;
pub mod utils;

pub use env::*;
pub use errors::*;
pub use events::*;
pub use registry::*;
pub use state::*;
pub use utils::*;
