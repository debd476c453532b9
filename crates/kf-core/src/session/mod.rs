//! Vault session lifecycle.
//!
//! Pure type state machine for lock/unlock/reset. Runtime behaviors (the
//! actual engine calls, retries, timeouts) are handled by the application
//! layer.

pub mod action;
pub mod event;
pub mod state;
pub mod state_machine;

pub use action::VaultSessionAction;
pub use event::VaultSessionEvent;
pub use state::VaultSessionState;
pub use state_machine::VaultSessionStateMachine;
