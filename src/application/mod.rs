// Application layer - use cases and orchestration.
// Storage and transport are collaborators; this layer only validates,
// computes balances and hands new snapshots to the store.

pub mod error;
mod service;

pub use error::*;
pub use service::*;
