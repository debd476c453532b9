use std::sync::Arc;

use tracing::warn;

use kf_core::ports::SyncEnginePort;
use kf_core::session::VaultSessionAction;

use crate::store::DataStore;

use super::orchestrator::VaultSessionError;

/// Maps session state machine actions onto sync engine calls.
pub struct VaultSessionExecutor {
    engine: Arc<dyn SyncEnginePort>,
    store: Arc<DataStore>,
}

impl VaultSessionExecutor {
    pub fn new(engine: Arc<dyn SyncEnginePort>, store: Arc<DataStore>) -> Self {
        Self { engine, store }
    }

    pub(super) async fn apply(&self, action: VaultSessionAction) -> Result<(), VaultSessionError> {
        match action {
            VaultSessionAction::UnlockStorage => {
                self.engine.unlock().await.map_err(VaultSessionError::Engine)?;
            }
            VaultSessionAction::StartSync => {
                // Sync kickoff failures surface through the status stream;
                // they must not roll back an unlock that already succeeded.
                if let Err(err) = self.engine.sync().await {
                    warn!(error = %err, "sync kickoff failed");
                }
            }
            VaultSessionAction::StopSync => {
                // A pass that cannot be stopped must not block locking.
                if let Err(err) = self.engine.stop_sync().await {
                    warn!(error = %err, "stop sync failed");
                }
            }
            VaultSessionAction::LockStorage => {
                self.engine.lock().await.map_err(VaultSessionError::Engine)?;
                self.store.publish_locked();
            }
            VaultSessionAction::DisconnectAccount => {
                self.engine
                    .disconnect()
                    .await
                    .map_err(VaultSessionError::Engine)?;
            }
            VaultSessionAction::DeleteLocalData => {
                self.engine
                    .delete_local_data()
                    .await
                    .map_err(VaultSessionError::Engine)?;
            }
            VaultSessionAction::ReinitializeStorage => {
                self.engine
                    .reinitialize()
                    .await
                    .map_err(VaultSessionError::Engine)?;
                self.store.publish_locked();
            }
        }

        Ok(())
    }
}
