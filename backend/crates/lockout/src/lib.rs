//! Lockout Administration Module
//!
//! Admin-facing view over the server-side account/IP lockout registry.
//!
//! Clean Architecture structure:
//! - `domain/` - lock entries, snapshots, store contract
//! - `application/` - the admin view use case
//! - `infra/` - HTTP client for the lockout store
//!
//! ## Security Model
//! - Lock entries are created server-side on repeated failed sign-ins;
//!   this module only lists them and forwards operator unlock commands
//! - Confirm, then act, then refetch: no optimistic local mutation, so
//!   the table always reflects server truth at action time
//! - A failed listing degrades to an empty table instead of blocking
//!   the admin page

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::admin_view::{LoadState, LockoutAdminView, UnlockKind, UnlockOutcome};
pub use application::config::AdminViewConfig;
pub use domain::entry::LockEntry;
pub use domain::snapshot::LockSnapshot;
pub use domain::store::{ConfirmPrompt, ConfirmRequest, LockStore};
pub use error::{LockoutError, LockoutResult};
pub use infra::http::HttpLockStore;
