//! Keyfold Application Orchestration Layer
//!
//! This crate binds the external sync engine to the view layer: the data
//! store republishes engine state as watch streams, presenters derive
//! render-ready signals from them, and the session use cases drive the
//! lock/unlock/reset lifecycle.

pub mod presenters;
pub mod store;
pub mod usecases;

pub use presenters::{ItemListPresenter, ListIntent};
pub use store::DataStore;
pub use usecases::session::{VaultSessionError, VaultSessionExecutor, VaultSessionOrchestrator};
