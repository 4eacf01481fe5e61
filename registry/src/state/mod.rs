pub mod agent;
pub mod identity;

pub use agent::*;
pub use identity::*;
