use serde::{Deserialize, Serialize};

/// Vault session state.
///
/// State transitions:
///
/// ```text
/// Locked ──→ Unlocking ──→ Unlocked
///   ↑            │             │
///   │            └─(failed)────┘→ Locking ──→ Locked
///   │                                │
///   └──────────── Resetting ←────────┘ (also reachable from Locked)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaultSessionState {
    /// Storage is locked; the list shows nothing actionable.
    Locked,

    /// Storage unlock is in flight.
    Unlocking,

    /// Storage is open and syncing is allowed.
    Unlocked,

    /// Sync is being stopped and storage locked.
    Locking,

    /// The account is being disconnected and local data destroyed.
    Resetting,
}

impl VaultSessionState {
    /// Check if a lock/unlock/reset flow is currently in flight.
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Self::Unlocking | Self::Locking | Self::Resetting)
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self, Self::Unlocked)
    }
}

impl Default for VaultSessionState {
    fn default() -> Self {
        Self::Locked
    }
}
