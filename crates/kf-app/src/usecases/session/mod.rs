//! Vault session use cases.
//!
//! Drives the core session state machine and executes its actions against
//! the sync engine.

pub mod executor;
pub mod orchestrator;

pub use executor::VaultSessionExecutor;
pub use orchestrator::{VaultSessionError, VaultSessionOrchestrator};
