use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};
use tokio::time::{sleep, timeout};

use kf_app::DataStore;
use kf_core::ids::LoginId;
use kf_core::ports::SyncEnginePort;
use kf_core::sync::SyncStatus;
use kf_core::vault::LoginRecord;

// ---------------------------------------------------------------------------
// Mock: SyncEnginePort (swappable login fetch result)
// ---------------------------------------------------------------------------

struct MockSyncEngine {
    /// `None` makes `get_all_logins` fail.
    logins: Mutex<Option<Vec<LoginRecord>>>,
    status_tx: Mutex<Option<mpsc::Sender<SyncStatus>>>,
}

impl MockSyncEngine {
    fn new() -> Self {
        Self {
            logins: Mutex::new(Some(Vec::new())),
            status_tx: Mutex::new(None),
        }
    }

    async fn set_logins(&self, logins: Option<Vec<LoginRecord>>) {
        *self.logins.lock().await = logins;
    }

    async fn status_sender(&self) -> mpsc::Sender<SyncStatus> {
        self.status_tx
            .lock()
            .await
            .as_ref()
            .expect("status subscription not taken")
            .clone()
    }
}

#[async_trait]
impl SyncEnginePort for MockSyncEngine {
    async fn sync(&self) -> Result<()> {
        Ok(())
    }

    async fn stop_sync(&self) -> Result<()> {
        Ok(())
    }

    async fn lock(&self) -> Result<()> {
        Ok(())
    }

    async fn unlock(&self) -> Result<()> {
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }

    async fn delete_local_data(&self) -> Result<()> {
        Ok(())
    }

    async fn reinitialize(&self) -> Result<()> {
        Ok(())
    }

    async fn get_all_logins(&self) -> Result<Vec<LoginRecord>> {
        self.logins
            .lock()
            .await
            .clone()
            .ok_or_else(|| anyhow!("login storage unavailable"))
    }

    async fn subscribe_status(&self) -> Result<mpsc::Receiver<SyncStatus>> {
        let (tx, rx) = mpsc::channel(16);
        *self.status_tx.lock().await = Some(tx);
        Ok(rx)
    }
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn record(id: &str) -> LoginRecord {
    LoginRecord {
        id: LoginId::from(id),
        hostname: "https://example.com".to_string(),
        username: "user@example.com".to_string(),
        last_used_at_ms: 100,
    }
}

async fn wait_status(
    rx: &mut tokio::sync::watch::Receiver<SyncStatus>,
    expected: SyncStatus,
) -> SyncStatus {
    timeout(Duration::from_secs(1), async {
        loop {
            let current = rx.borrow_and_update().clone();
            if current == expected {
                return current;
            }
            rx.changed().await.expect("status channel closed");
        }
    })
    .await
    .expect("timed out waiting for status")
}

async fn wait_logins(
    rx: &mut tokio::sync::watch::Receiver<Vec<LoginRecord>>,
    pred: impl Fn(&[LoginRecord]) -> bool,
) -> Vec<LoginRecord> {
    timeout(Duration::from_secs(1), async {
        loop {
            let current = rx.borrow_and_update().clone();
            if pred(&current) {
                return current;
            }
            rx.changed().await.expect("logins channel closed");
        }
    })
    .await
    .expect("timed out waiting for logins")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn republishes_engine_status_emissions() {
    let engine = Arc::new(MockSyncEngine::new());
    let store = DataStore::start(engine.clone() as Arc<dyn SyncEnginePort>)
        .await
        .expect("store start");
    let mut status = store.status();

    assert_eq!(*status.borrow(), SyncStatus::NotSyncable);

    let tx = engine.status_sender().await;
    tx.send(SyncStatus::ReadyToSync).await.unwrap();
    wait_status(&mut status, SyncStatus::ReadyToSync).await;

    tx.send(SyncStatus::Syncing).await.unwrap();
    wait_status(&mut status, SyncStatus::Syncing).await;
}

#[tokio::test]
async fn synced_status_refreshes_the_login_list() {
    let engine = Arc::new(MockSyncEngine::new());
    let store = DataStore::start(engine.clone() as Arc<dyn SyncEnginePort>)
        .await
        .expect("store start");
    let mut logins = store.logins();

    engine.set_logins(Some(vec![record("login-1")])).await;
    engine
        .status_sender()
        .await
        .send(SyncStatus::Synced)
        .await
        .unwrap();

    let published = wait_logins(&mut logins, |logins| !logins.is_empty()).await;
    assert_eq!(published, vec![record("login-1")]);
}

#[tokio::test]
async fn non_synced_statuses_do_not_touch_the_list() {
    let engine = Arc::new(MockSyncEngine::new());
    let store = DataStore::start(engine.clone() as Arc<dyn SyncEnginePort>)
        .await
        .expect("store start");
    let mut logins = store.logins();
    logins.borrow_and_update();

    let tx = engine.status_sender().await;
    tx.send(SyncStatus::ReadyToSync).await.unwrap();
    tx.send(SyncStatus::Syncing).await.unwrap();
    sleep(Duration::from_millis(60)).await;

    assert!(!logins.has_changed().unwrap());
}

#[tokio::test]
async fn refresh_failure_falls_back_to_an_empty_list() {
    let engine = Arc::new(MockSyncEngine::new());
    let store = DataStore::start(engine.clone() as Arc<dyn SyncEnginePort>)
        .await
        .expect("store start");
    let mut logins = store.logins();
    let tx = engine.status_sender().await;

    engine.set_logins(Some(vec![record("login-1")])).await;
    tx.send(SyncStatus::Synced).await.unwrap();
    wait_logins(&mut logins, |logins| !logins.is_empty()).await;

    engine.set_logins(None).await;
    tx.send(SyncStatus::Synced).await.unwrap();
    wait_logins(&mut logins, |logins| logins.is_empty()).await;
}

#[tokio::test]
async fn dropping_the_store_stops_forwarding() {
    let engine = Arc::new(MockSyncEngine::new());
    let store = DataStore::start(engine.clone() as Arc<dyn SyncEnginePort>)
        .await
        .expect("store start");
    let tx = engine.status_sender().await;

    drop(store);

    timeout(Duration::from_secs(1), async {
        loop {
            if tx.send(SyncStatus::Syncing).await.is_err() {
                return;
            }
            sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("forwarder should stop once the store is dropped");
}
