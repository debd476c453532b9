use anyhow::Result;
use async_trait::async_trait;

/// Imperative callbacks into the login list view.
///
/// Everything stream-shaped reaches the view through watch channels; these
/// are the one-shot notifications that do not fit a value signal.
#[async_trait]
pub trait ItemListViewPort: Send + Sync {
    /// Show or hide the "no entries" message.
    async fn set_empty_state_visible(&self, visible: bool) -> Result<()>;

    /// Show or hide the cancel affordance next to the filter field.
    async fn set_filter_cancel_visible(&self, visible: bool) -> Result<()>;

    /// Show the sync progress indicator.
    async fn show_sync_progress(&self) -> Result<()>;

    /// Dismiss the sync progress indicator.
    async fn dismiss_sync_progress(&self) -> Result<()>;
}
