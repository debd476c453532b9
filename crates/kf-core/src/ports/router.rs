use anyhow::Result;
use async_trait::async_trait;

use crate::ids::LoginId;

/// Navigation intent sink.
#[async_trait]
pub trait RouterPort: Send + Sync {
    /// Push the detail screen for a stored login.
    async fn open_item_detail(&self, id: &LoginId) -> Result<()>;
}
