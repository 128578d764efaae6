//! Application Layer
//!
//! The admin view use case and its configuration.

pub mod admin_view;
pub mod config;

// Re-exports
pub use admin_view::{LoadState, LockoutAdminView, UnlockKind, UnlockOutcome};
pub use config::AdminViewConfig;
