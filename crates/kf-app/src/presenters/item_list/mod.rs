//! Item list presenter.
//!
//! Combines the store's login list and sync status with the user's filter
//! and sort intents into a render-ready row signal, plus the control
//! enablement signals and the imperative view notifications that hang off
//! the same inputs.

mod intent;
mod pipeline;

use std::sync::Arc;

use anyhow::{anyhow, Result};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use kf_core::config::AppConfig;
use kf_core::ids::LoginId;
use kf_core::list::{DisplayRow, SortOrder};
use kf_core::ports::{ItemListViewPort, RouterPort};
use kf_core::sync::SyncStatus;
use kf_core::vault::LoginRecord;

pub use intent::ListIntent;

use pipeline::Pipeline;

/// Intents queued between the view bridge and the pipeline task.
const INTENT_QUEUE_DEPTH: usize = 16;

/// Handle to a running item list pipeline.
///
/// Subscriptions are scoped to this handle: dropping it aborts the task and
/// every derived signal goes quiet, mirroring view teardown.
pub struct ItemListPresenter {
    intent_tx: mpsc::Sender<ListIntent>,
    rows_rx: watch::Receiver<Vec<DisplayRow>>,
    sort_label_rx: watch::Receiver<String>,
    sort_enabled_rx: watch::Receiver<bool>,
    list_enabled_rx: watch::Receiver<bool>,
    task: JoinHandle<()>,
}

impl ItemListPresenter {
    /// Spawn the pipeline over the store's streams.
    pub fn spawn(
        logins: watch::Receiver<Vec<LoginRecord>>,
        status: watch::Receiver<SyncStatus>,
        view: Arc<dyn ItemListViewPort>,
        router: Arc<dyn RouterPort>,
        config: &AppConfig,
    ) -> Self {
        let (intent_tx, intents) = mpsc::channel(INTENT_QUEUE_DEPTH);
        let (rows_tx, rows_rx) = watch::channel(Vec::new());
        let (sort_label_tx, sort_label_rx) =
            watch::channel(config.default_sort_order.label().to_string());
        let (sort_enabled_tx, sort_enabled_rx) = watch::channel(false);
        let (list_enabled_tx, list_enabled_rx) = watch::channel(false);

        let pipeline = Pipeline {
            logins,
            status,
            intents,
            view,
            router,
            rows_tx,
            sort_label_tx,
            sort_enabled_tx,
            list_enabled_tx,
            filter_text: String::new(),
            sort_order: config.default_sort_order,
            last_snapshot: None,
            progress_visible: false,
        };
        let task = tokio::spawn(pipeline.run());

        Self {
            intent_tx,
            rows_rx,
            sort_label_rx,
            sort_enabled_rx,
            list_enabled_rx,
            task,
        }
    }

    /// The projected, render-ready row sequence.
    pub fn rows(&self) -> watch::Receiver<Vec<DisplayRow>> {
        self.rows_rx.clone()
    }

    /// Human-readable label for the current sort order.
    pub fn sort_label(&self) -> watch::Receiver<String> {
        self.sort_label_rx.clone()
    }

    pub fn sort_control_enabled(&self) -> watch::Receiver<bool> {
        self.sort_enabled_rx.clone()
    }

    pub fn list_interaction_enabled(&self) -> watch::Receiver<bool> {
        self.list_enabled_rx.clone()
    }

    /// Replace the free-text filter.
    pub async fn set_filter(&self, text: String) -> Result<()> {
        self.send(ListIntent::SetFilter(text)).await
    }

    /// Switch the sort criterion.
    pub async fn set_sort(&self, order: SortOrder) -> Result<()> {
        self.send(ListIntent::SetSort(order)).await
    }

    /// Route to the detail screen for a row selection.
    pub async fn select_item(&self, id: LoginId) -> Result<()> {
        self.send(ListIntent::SelectItem(id)).await
    }

    async fn send(&self, intent: ListIntent) -> Result<()> {
        self.intent_tx
            .send(intent)
            .await
            .map_err(|_| anyhow!("item list presenter is no longer running"))
    }
}

impl Drop for ItemListPresenter {
    fn drop(&mut self) {
        self.task.abort();
    }
}
