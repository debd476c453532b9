use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use kf_core::list::{controls_enabled, project, DisplayRow, ProjectionSnapshot, SortOrder};
use kf_core::ports::{ItemListViewPort, RouterPort};
use kf_core::sync::SyncStatus;
use kf_core::vault::LoginRecord;

use super::intent::ListIntent;

/// The combine-and-project loop behind the item list presenter.
///
/// Holds the last-known value of every upstream signal; any input change
/// recomputes the combined snapshot, deduplicates by value equality, and
/// republishes the derived signals. Everything runs on this one task.
pub(super) struct Pipeline {
    pub(super) logins: watch::Receiver<Vec<LoginRecord>>,
    pub(super) status: watch::Receiver<SyncStatus>,
    pub(super) intents: mpsc::Receiver<ListIntent>,
    pub(super) view: Arc<dyn ItemListViewPort>,
    pub(super) router: Arc<dyn RouterPort>,

    pub(super) rows_tx: watch::Sender<Vec<DisplayRow>>,
    pub(super) sort_label_tx: watch::Sender<String>,
    pub(super) sort_enabled_tx: watch::Sender<bool>,
    pub(super) list_enabled_tx: watch::Sender<bool>,

    pub(super) filter_text: String,
    pub(super) sort_order: SortOrder,
    pub(super) last_snapshot: Option<ProjectionSnapshot>,
    pub(super) progress_visible: bool,
}

enum Wake {
    Inputs,
    Intent(ListIntent),
    Closed,
}

impl Pipeline {
    pub(super) async fn run(mut self) {
        // Seed the derived signals from the initial input values.
        self.republish().await;

        loop {
            let wake = tokio::select! {
                changed = self.logins.changed() => {
                    if changed.is_ok() { Wake::Inputs } else { Wake::Closed }
                }
                changed = self.status.changed() => {
                    if changed.is_ok() { Wake::Inputs } else { Wake::Closed }
                }
                intent = self.intents.recv() => match intent {
                    Some(intent) => Wake::Intent(intent),
                    None => Wake::Closed,
                },
            };

            match wake {
                Wake::Inputs => self.republish().await,
                Wake::Intent(intent) => self.handle_intent(intent).await,
                Wake::Closed => break,
            }
        }
    }

    async fn handle_intent(&mut self, intent: ListIntent) {
        match intent {
            ListIntent::SetFilter(text) => {
                if let Err(err) = self.view.set_filter_cancel_visible(!text.is_empty()).await {
                    warn!(error = %err, "filter cancel notification failed");
                }
                self.filter_text = text;
                self.republish().await;
            }
            ListIntent::SetSort(order) => {
                self.sort_order = order;
                self.sort_label_tx.send_if_modified(|label| {
                    if *label != order.label() {
                        *label = order.label().to_string();
                        true
                    } else {
                        false
                    }
                });
                self.republish().await;
            }
            ListIntent::SelectItem(id) => {
                let known = self.logins.borrow().iter().any(|record| record.id == id);
                if !known {
                    debug!(%id, "detail requested for a login not in the list");
                    return;
                }
                if let Err(err) = self.router.open_item_detail(&id).await {
                    warn!(error = %err, "detail navigation failed");
                }
            }
        }
    }

    async fn republish(&mut self) {
        let snapshot = ProjectionSnapshot {
            logins: self.logins.borrow().clone(),
            filter_text: self.filter_text.clone(),
            sort_order: self.sort_order,
            sync_status: self.status.borrow().clone(),
        };
        if self.last_snapshot.as_ref() == Some(&snapshot) {
            return;
        }

        self.apply_side_effects(&snapshot).await;

        let enabled = controls_enabled(&snapshot.sync_status, snapshot.logins.is_empty());
        set_flag(&self.sort_enabled_tx, enabled);
        set_flag(&self.list_enabled_tx, enabled);

        // "Empty and synced" is withheld from the rows signal: the empty-state
        // message owns that combination, and re-projecting would flicker the
        // list while it is indistinguishable from a late first load.
        if !(snapshot.logins.is_empty() && snapshot.sync_status.is_synced()) {
            self.rows_tx.send_replace(project(&snapshot));
        }

        self.last_snapshot = Some(snapshot);
    }

    /// The list/status sub-pipeline: empty-state and progress notifications.
    /// Not gated by filter or sort.
    async fn apply_side_effects(&mut self, snapshot: &ProjectionSnapshot) {
        let inputs_changed = self.last_snapshot.as_ref().map_or(true, |prev| {
            prev.logins != snapshot.logins || prev.sync_status != snapshot.sync_status
        });
        if !inputs_changed {
            return;
        }

        if snapshot.sync_status.is_syncing() && !self.progress_visible {
            self.progress_visible = true;
            if let Err(err) = self.view.show_sync_progress().await {
                warn!(error = %err, "progress indicator failed to show");
            }
        } else if snapshot.sync_status.is_synced() && self.progress_visible {
            // One-shot: the first Synced emission dismisses, and only the
            // next Syncing arms the indicator again.
            self.progress_visible = false;
            if let Err(err) = self.view.dismiss_sync_progress().await {
                warn!(error = %err, "progress indicator failed to dismiss");
            }
        }

        if !snapshot.logins.is_empty() {
            self.set_empty_state(false).await;
        } else if snapshot.sync_status.is_synced() {
            self.set_empty_state(true).await;
        }
    }

    async fn set_empty_state(&self, visible: bool) {
        if let Err(err) = self.view.set_empty_state_visible(visible).await {
            warn!(error = %err, "empty state notification failed");
        }
    }
}

fn set_flag(tx: &watch::Sender<bool>, value: bool) {
    tx.send_if_modified(|current| {
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    });
}
