//! Store Contracts
//!
//! Interfaces to the server-side lockout registry and the operator
//! confirmation dialog. Implementations live in the infrastructure
//! layer (or the hosting UI); tests provide in-memory doubles.

use crate::domain::snapshot::LockSnapshot;
use crate::error::LockoutResult;

/// Server-side lockout registry, admin contract
///
/// Unlock operations are best-effort: repeating an unlock for an
/// already-cleared identity must succeed, not error.
#[trait_variant::make(LockStore: Send)]
pub trait LocalLockStore {
    /// Fetch the full current lock set
    async fn fetch_locks(&self) -> LockoutResult<LockSnapshot>;

    /// Clear a user lock by bare employee code
    async fn unlock_user(&self, code: &str) -> LockoutResult<()>;

    /// Clear an IP lock
    async fn unlock_ip(&self, ip: &str) -> LockoutResult<()>;
}

/// Operator confirmation dialog
///
/// The admin view never dispatches an unlock without a positive answer
/// from here.
#[trait_variant::make(ConfirmPrompt: Send)]
pub trait LocalConfirmPrompt {
    /// Present the request and wait for the operator's decision
    async fn confirm(&self, request: &ConfirmRequest) -> bool;
}

/// Payload shown in the confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub ok_label: String,
}
