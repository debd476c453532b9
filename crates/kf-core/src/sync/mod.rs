//! Sync engine status as observed by the UI layer.

pub mod status;

pub use status::SyncStatus;
