//! Vault session orchestrator.
//!
//! Coordinates the session state machine and its side effects. The engine
//! calls for one flow run as a linear sequence; the first failure stops the
//! remainder and the matching failure event settles the state.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info_span, Instrument};

use kf_core::config::AppConfig;
use kf_core::session::{VaultSessionEvent, VaultSessionState, VaultSessionStateMachine};

use super::executor::VaultSessionExecutor;

/// Errors produced by vault session flows.
#[derive(Debug, thiserror::Error)]
pub enum VaultSessionError {
    #[error("sync engine call failed: {0}")]
    Engine(#[source] anyhow::Error),
}

/// Orchestrator that drives vault session state and side effects.
pub struct VaultSessionOrchestrator {
    state: Arc<Mutex<VaultSessionState>>,
    dispatch_lock: Arc<Mutex<()>>,
    executor: VaultSessionExecutor,
}

impl VaultSessionOrchestrator {
    pub fn new(executor: VaultSessionExecutor) -> Self {
        Self {
            state: Arc::new(Mutex::new(VaultSessionState::Locked)),
            dispatch_lock: Arc::new(Mutex::new(())),
            executor,
        }
    }

    pub async fn state(&self) -> VaultSessionState {
        self.state.lock().await.clone()
    }

    /// Unlock storage, then kick off a sync pass.
    pub async fn unlock(&self) -> Result<VaultSessionState, VaultSessionError> {
        match self.dispatch(VaultSessionEvent::UnlockRequested).await {
            Ok(_) => self.dispatch(VaultSessionEvent::UnlockSucceeded).await,
            Err(err) => {
                let _ = self
                    .dispatch(VaultSessionEvent::UnlockFailed {
                        reason: err.to_string(),
                    })
                    .await;
                Err(err)
            }
        }
    }

    /// Stop syncing and lock storage.
    pub async fn lock(&self) -> Result<VaultSessionState, VaultSessionError> {
        match self.dispatch(VaultSessionEvent::LockRequested).await {
            Ok(_) => self.dispatch(VaultSessionEvent::LockCompleted).await,
            Err(err) => {
                let _ = self
                    .dispatch(VaultSessionEvent::LockFailed {
                        reason: err.to_string(),
                    })
                    .await;
                Err(err)
            }
        }
    }

    /// Disconnect the account: stop sync, disconnect, destroy local data,
    /// re-create empty storage.
    pub async fn reset(&self) -> Result<VaultSessionState, VaultSessionError> {
        match self.dispatch(VaultSessionEvent::ResetRequested).await {
            Ok(_) => self.dispatch(VaultSessionEvent::ResetCompleted).await,
            Err(err) => {
                let _ = self
                    .dispatch(VaultSessionEvent::ResetFailed {
                        reason: err.to_string(),
                    })
                    .await;
                Err(err)
            }
        }
    }

    /// Apply the auto-lock policy when the app leaves the foreground.
    pub async fn handle_backgrounded(
        &self,
        config: &AppConfig,
    ) -> Result<VaultSessionState, VaultSessionError> {
        let current = self.state().await;
        if current.is_unlocked() && config.locks_on_background() {
            self.lock().await
        } else {
            Ok(current)
        }
    }

    async fn dispatch(
        &self,
        event: VaultSessionEvent,
    ) -> Result<VaultSessionState, VaultSessionError> {
        let _dispatch_guard = self.dispatch_lock.lock().await;

        let span = info_span!("usecase.vault_session.dispatch", event = ?event);
        async {
            let current = self.state.lock().await.clone();
            let (next, actions) = VaultSessionStateMachine::transition(current, event);
            {
                let mut guard = self.state.lock().await;
                *guard = next.clone();
            }
            for action in actions {
                self.executor.apply(action).await?;
            }
            Ok(next)
        }
        .instrument(span)
        .await
    }
}
