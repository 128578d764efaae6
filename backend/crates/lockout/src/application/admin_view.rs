//! Lockout Admin View
//!
//! Presents the current lock set and forwards unlock decisions.
//! The interaction pattern is confirm, then act, then refetch: an entry
//! is never removed locally before the server confirms, so the table
//! cannot drift from server truth.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{Mutex, watch};

use crate::application::config::AdminViewConfig;
use crate::domain::snapshot::LockSnapshot;
use crate::domain::store::{ConfirmPrompt, ConfirmRequest, LockStore};
use crate::error::LockoutResult;

/// Page-instance load state
///
/// `Idle → Loading → {Loaded | LoadFailed}`; `Loading` is only entered
/// when the fetch outlasts the flicker threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(LockSnapshot),
    LoadFailed,
}

/// What kind of lock an unlock command targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockKind {
    User,
    Ip,
}

/// Result of one unlock interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// Confirmed, dispatched, and the snapshot was refreshed
    Completed,
    /// Operator cancelled the confirmation dialog
    Declined,
    /// Another unlock dialog is still open; nothing was dispatched
    AlreadyPending,
}

/// Admin-facing view over the lockout registry
pub struct LockoutAdminView<S> {
    store: Arc<S>,
    config: AdminViewConfig,
    state_tx: watch::Sender<LoadState>,
    /// Serializes unlock interactions per operator click
    dialog_gate: Mutex<()>,
}

impl<S: LockStore> LockoutAdminView<S> {
    pub fn new(store: Arc<S>, config: AdminViewConfig) -> Self {
        let (state_tx, _) = watch::channel(LoadState::Idle);
        Self {
            store,
            config,
            state_tx,
            dialog_gate: Mutex::new(()),
        }
    }

    /// Observe state transitions (UI binding)
    pub fn state_rx(&self) -> watch::Receiver<LoadState> {
        self.state_tx.subscribe()
    }

    /// Current state
    pub fn state(&self) -> LoadState {
        self.state_tx.borrow().clone()
    }

    /// Current lock set; empty unless a fetch has succeeded
    pub fn snapshot(&self) -> LockSnapshot {
        match &*self.state_tx.borrow() {
            LoadState::Loaded(snapshot) => snapshot.clone(),
            _ => LockSnapshot::empty(),
        }
    }

    /// Re-fetch the lock set from the store
    ///
    /// Degrades to an empty table on failure instead of blocking the
    /// page render; the failure is logged and not retried automatically.
    pub async fn refresh(&self) -> LockSnapshot {
        let fetch = self.store.fetch_locks();
        tokio::pin!(fetch);

        let result = match tokio::time::timeout(self.config.loading_delay, &mut fetch).await {
            Ok(result) => result,
            Err(_elapsed) => {
                // fetch outlasted the flicker threshold
                self.state_tx.send_replace(LoadState::Loading);
                fetch.await
            }
        };

        // single settle path for both branches clears the indicator
        self.settle(result)
    }

    fn settle(&self, result: LockoutResult<LockSnapshot>) -> LockSnapshot {
        match result {
            Ok(snapshot) => {
                // the server prunes lazily; never show already-expired locks
                let snapshot = snapshot.without_expired(Utc::now());
                self.state_tx.send_replace(LoadState::Loaded(snapshot.clone()));
                snapshot
            }
            Err(error) => {
                tracing::warn!(%error, "lock listing fetch failed; showing empty table");
                self.state_tx.send_replace(LoadState::LoadFailed);
                LockSnapshot::empty()
            }
        }
    }

    /// Confirm with the operator, dispatch the unlock, then refetch
    ///
    /// A second click while a dialog is open returns `AlreadyPending`
    /// without dispatching. On store failure the previous snapshot
    /// stays in place and the error is surfaced for a manual retry.
    pub async fn unlock<P: ConfirmPrompt>(
        &self,
        kind: UnlockKind,
        key: &str,
        prompt: &P,
    ) -> LockoutResult<UnlockOutcome> {
        let Ok(_gate) = self.dialog_gate.try_lock() else {
            return Ok(UnlockOutcome::AlreadyPending);
        };

        let request = confirm_request(kind, key);
        if !prompt.confirm(&request).await {
            return Ok(UnlockOutcome::Declined);
        }

        match kind {
            UnlockKind::User => {
                let code = kernel::lock_key::bare_identifier(key);
                self.store.unlock_user(code).await?;
                tracing::info!(code, "account lock cleared");
            }
            UnlockKind::Ip => {
                self.store.unlock_ip(key).await?;
                tracing::info!(ip = key, "ip lock cleared");
            }
        }

        self.refresh().await;
        Ok(UnlockOutcome::Completed)
    }
}

/// Dialog payload for an unlock action
fn confirm_request(kind: UnlockKind, key: &str) -> ConfirmRequest {
    match kind {
        UnlockKind::User => {
            let code = kernel::lock_key::bare_identifier(key);
            ConfirmRequest {
                title: "アカウントロック解除".to_string(),
                message: format!("社員番号 {} のロックを解除してもよろしいですか？", code),
                ok_label: "解除する".to_string(),
            }
        }
        UnlockKind::Ip => ConfirmRequest {
            title: "IPアクセス制限解除".to_string(),
            message: format!("IPアドレス {} の制限を解除してもよろしいですか？", key),
            ok_label: "解除する".to_string(),
        },
    }
}
