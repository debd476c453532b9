//! Sync engine port - abstracts the external browser-sync profile library.
//!
//! Account login, profile lifecycle, the sync protocol, conflict resolution
//! and encrypted login storage all live behind this trait; this repo only
//! orchestrates calls into it and republishes what it reports.

use anyhow::Result;
use async_trait::async_trait;

use crate::sync::SyncStatus;
use crate::vault::LoginRecord;

/// Sync engine port - abstracts the external sync/storage library.
#[async_trait]
pub trait SyncEnginePort: Send + Sync {
    /// Kick off a sync pass. Completion and failures are reported through
    /// the status subscription, not the return value.
    async fn sync(&self) -> Result<()>;

    /// Stop a running sync pass, if any.
    async fn stop_sync(&self) -> Result<()>;

    /// Lock login storage, dropping decrypted state.
    async fn lock(&self) -> Result<()>;

    /// Unlock login storage with the key material the engine holds.
    async fn unlock(&self) -> Result<()>;

    /// Disconnect the account from the sync service.
    async fn disconnect(&self) -> Result<()>;

    /// Destroy the local login database.
    async fn delete_local_data(&self) -> Result<()>;

    /// Re-create empty storage for the next account.
    async fn reinitialize(&self) -> Result<()>;

    /// Fetch the full login list. Only meaningful while storage is unlocked.
    async fn get_all_logins(&self) -> Result<Vec<LoginRecord>>;

    /// Subscribe to sync status notifications.
    ///
    /// Returns a receiver that yields every status the engine publishes,
    /// in the order published.
    async fn subscribe_status(&self) -> Result<tokio::sync::mpsc::Receiver<SyncStatus>>;
}
