use tracing::warn;

use crate::session::action::VaultSessionAction;
use crate::session::event::VaultSessionEvent;
use crate::session::state::VaultSessionState;

pub struct VaultSessionStateMachine;

impl VaultSessionStateMachine {
    pub fn transition(
        state: VaultSessionState,
        event: VaultSessionEvent,
    ) -> (VaultSessionState, Vec<VaultSessionAction>) {
        match (state, event) {
            // ===== Unlock =====
            (VaultSessionState::Locked, VaultSessionEvent::UnlockRequested) => (
                VaultSessionState::Unlocking,
                vec![VaultSessionAction::UnlockStorage],
            ),
            (VaultSessionState::Unlocking, VaultSessionEvent::UnlockSucceeded) => (
                VaultSessionState::Unlocked,
                vec![VaultSessionAction::StartSync],
            ),
            (VaultSessionState::Unlocking, VaultSessionEvent::UnlockFailed { reason }) => {
                warn!(%reason, "vault unlock failed");
                (VaultSessionState::Locked, vec![])
            }

            // ===== Lock =====
            (VaultSessionState::Unlocked, VaultSessionEvent::LockRequested) => (
                VaultSessionState::Locking,
                vec![
                    VaultSessionAction::StopSync,
                    VaultSessionAction::LockStorage,
                ],
            ),
            (VaultSessionState::Locking, VaultSessionEvent::LockCompleted) => {
                (VaultSessionState::Locked, vec![])
            }
            (VaultSessionState::Locking, VaultSessionEvent::LockFailed { reason }) => {
                warn!(%reason, "vault lock failed; storage stays open");
                (VaultSessionState::Unlocked, vec![])
            }

            // ===== Reset =====
            // The disconnect chain runs as one linear sequence; a failure
            // anywhere stops the remainder (ResetFailed).
            (
                VaultSessionState::Unlocked | VaultSessionState::Locked,
                VaultSessionEvent::ResetRequested,
            ) => (
                VaultSessionState::Resetting,
                vec![
                    VaultSessionAction::StopSync,
                    VaultSessionAction::DisconnectAccount,
                    VaultSessionAction::DeleteLocalData,
                    VaultSessionAction::ReinitializeStorage,
                ],
            ),
            (VaultSessionState::Resetting, VaultSessionEvent::ResetCompleted) => {
                (VaultSessionState::Locked, vec![])
            }
            (VaultSessionState::Resetting, VaultSessionEvent::ResetFailed { reason }) => {
                warn!(%reason, "account reset stopped partway");
                (VaultSessionState::Locked, vec![])
            }

            // ===== Invalid =====
            (state, event) => {
                warn!(?state, ?event, "invalid vault session transition");
                (state, vec![])
            }
        }
    }
}
