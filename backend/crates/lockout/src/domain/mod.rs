//! Domain Layer
//!
//! Lock entries, snapshots, and the store contract.

pub mod entry;
pub mod snapshot;
pub mod store;

// Re-exports
pub use entry::LockEntry;
pub use snapshot::LockSnapshot;
pub use store::{ConfirmPrompt, ConfirmRequest, LockStore};
