//! Lock Snapshot
//!
//! The full lock set as fetched from the server. Fetched fresh on every
//! render and after every unlock; never cached across calls, so admin
//! actions always act on current server truth.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::entry::LockEntry;

/// Current server truth about IP and user locks
///
/// Keyed maps are ordered so tables render deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockSnapshot {
    /// IP アドレス -> ロック
    pub ip_locks: BTreeMap<String, LockEntry>,
    /// 複合キー -> ロック
    pub user_locks: BTreeMap<String, LockEntry>,
}

impl LockSnapshot {
    /// Snapshot with no outstanding locks (also the degraded fallback)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ip_locks.is_empty() && self.user_locks.is_empty()
    }

    /// Total number of outstanding locks
    pub fn len(&self) -> usize {
        self.ip_locks.len() + self.user_locks.len()
    }

    /// Drop entries whose natural expiry has already passed at `now`
    ///
    /// The server prunes expired locks lazily, so a listing may still
    /// carry entries that no longer deny anything; the table must not
    /// show them.
    pub fn without_expired(mut self, now: DateTime<Utc>) -> Self {
        self.ip_locks.retain(|_, entry| !entry.is_expired(now));
        self.user_locks.retain(|_, entry| !entry.is_expired(now));
        self
    }
}
