/// Side effects requested by the vault session state machine, executed in
/// order by the application layer against the sync engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultSessionAction {
    /// Ask storage to unlock.
    UnlockStorage,

    /// Kick off a sync pass.
    StartSync,

    /// Stop any running sync pass.
    StopSync,

    /// Lock storage and drop decrypted state.
    LockStorage,

    /// Disconnect the account from the sync service.
    DisconnectAccount,

    /// Destroy the local login database.
    DeleteLocalData,

    /// Re-create empty storage for the next account.
    ReinitializeStorage,
}
