use std::mem::discriminant;

use serde::{Deserialize, Serialize};

/// Status reported by the external sync engine.
///
/// The engine owns every transition; this layer only reacts to emissions.
/// `Error` carries the engine's reason string for user-facing messaging, but
/// the payload never influences behavior here: equality is tag-only, so two
/// errors with different reasons compare equal and deduplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Storage is locked or no account is connected; logins are unavailable.
    NotSyncable,

    /// Storage is unlocked and a sync can start at any moment.
    ReadyToSync,

    /// A sync pass is running.
    Syncing,

    /// The last sync pass finished and the login list is current.
    Synced,

    /// The last sync pass failed; the engine retries on its own schedule.
    Error { message: String },
}

impl SyncStatus {
    pub fn is_syncing(&self) -> bool {
        matches!(self, Self::Syncing)
    }

    pub fn is_synced(&self) -> bool {
        matches!(self, Self::Synced)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// True while the first login list may still be on its way.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Syncing | Self::ReadyToSync)
    }
}

impl PartialEq for SyncStatus {
    fn eq(&self, other: &Self) -> bool {
        discriminant(self) == discriminant(other)
    }
}

impl Eq for SyncStatus {}

impl Default for SyncStatus {
    fn default() -> Self {
        Self::NotSyncable
    }
}
