use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use kf_core::ports::SyncEnginePort;
use kf_core::sync::SyncStatus;
use kf_core::vault::LoginRecord;

/// Thin adapter over the external sync engine.
///
/// The engine owns accounts, the sync protocol and encrypted storage; this
/// store only orchestrates calls into it and republishes its state as watch
/// streams the presenters combine. The login list is replaced wholesale on
/// every refresh.
pub struct DataStore {
    engine: Arc<dyn SyncEnginePort>,
    list_tx: watch::Sender<Vec<LoginRecord>>,
    status_tx: watch::Sender<SyncStatus>,
    forwarder: JoinHandle<()>,
}

impl DataStore {
    /// Subscribe to the engine and start republishing its state.
    pub async fn start(engine: Arc<dyn SyncEnginePort>) -> Result<Self> {
        let (list_tx, _) = watch::channel(Vec::new());
        let (status_tx, _) = watch::channel(SyncStatus::NotSyncable);

        let status_source = engine.subscribe_status().await?;
        let forwarder = tokio::spawn(forward_engine_state(
            engine.clone(),
            status_source,
            list_tx.clone(),
            status_tx.clone(),
        ));

        Ok(Self {
            engine,
            list_tx,
            status_tx,
            forwarder,
        })
    }

    /// Stream of the current login list.
    pub fn logins(&self) -> watch::Receiver<Vec<LoginRecord>> {
        self.list_tx.subscribe()
    }

    /// Stream of the engine's sync status.
    pub fn status(&self) -> watch::Receiver<SyncStatus> {
        self.status_tx.subscribe()
    }

    /// Ask the engine for a sync pass (pull-to-refresh path). Completion is
    /// reported through the status stream.
    pub async fn sync(&self) -> Result<()> {
        self.engine.sync().await
    }

    /// Drop republished state after storage locked: the list empties and the
    /// status falls back to not-syncable until the next unlock.
    pub(crate) fn publish_locked(&self) {
        self.list_tx.send_replace(Vec::new());
        self.status_tx.send_replace(SyncStatus::NotSyncable);
    }
}

impl Drop for DataStore {
    fn drop(&mut self) {
        self.forwarder.abort();
    }
}

/// Forward engine status emissions and refresh the login list when a sync
/// pass lands.
async fn forward_engine_state(
    engine: Arc<dyn SyncEnginePort>,
    mut status_source: tokio::sync::mpsc::Receiver<SyncStatus>,
    list_tx: watch::Sender<Vec<LoginRecord>>,
    status_tx: watch::Sender<SyncStatus>,
) {
    while let Some(status) = status_source.recv().await {
        let refresh = status.is_synced();
        status_tx.send_replace(status);

        if refresh {
            match engine.get_all_logins().await {
                Ok(logins) => {
                    debug!(count = logins.len(), "login list refreshed");
                    list_tx.send_replace(logins);
                }
                Err(err) => {
                    // Fail-safe: the view falls back to the empty list; the
                    // engine reports its own errors through the status stream.
                    error!(error = %err, "login refresh failed, publishing empty list");
                    list_tx.send_replace(Vec::new());
                }
            }
        }
    }
}
