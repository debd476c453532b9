/// Events driving the vault session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultSessionEvent {
    /// The user asked to open the vault.
    UnlockRequested,

    /// Storage reported a successful unlock.
    UnlockSucceeded,

    /// Storage refused to unlock.
    UnlockFailed { reason: String },

    /// The user (or the auto-lock policy) asked to close the vault.
    LockRequested,

    /// Sync stopped and storage locked.
    LockCompleted,

    /// Locking failed; storage stays open.
    LockFailed { reason: String },

    /// The user asked to disconnect the account and wipe local data.
    ResetRequested,

    /// The disconnect chain ran to completion.
    ResetCompleted,

    /// The disconnect chain stopped partway.
    ResetFailed { reason: String },
}
