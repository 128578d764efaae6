//! Lock Entry
//!
//! 一時的にアクセス拒否された識別子とその期限。認証側が失敗回数に応じて
//! 作成するもので、ここでは読み取りと解除のみを扱う。

use chrono::{DateTime, Utc};

/// One temporarily denied identity
///
/// `key` is either a bare IP address or a composite `scope:identifier`
/// such as a user lock keyed by employee code. Entries are immutable
/// once recorded; removal happens via an explicit unlock or natural
/// expiry on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEntry {
    pub key: String,
    pub expires_at: DateTime<Utc>,
}

impl LockEntry {
    pub fn new(key: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            expires_at,
        }
    }

    /// Whether natural expiry has already passed at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// 複合キーの識別子部分 (社員番号など)
    pub fn bare_identifier(&self) -> &str {
        kernel::lock_key::bare_identifier(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let entry = LockEntry::new("user:E0012", now + Duration::minutes(15));

        assert!(!entry.is_expired(now));
        assert!(entry.is_expired(now + Duration::minutes(15)));
        assert!(entry.is_expired(now + Duration::minutes(16)));
    }

    #[test]
    fn test_bare_identifier_for_user_and_ip_keys() {
        let expires = Utc::now();
        assert_eq!(
            LockEntry::new("user:E0012", expires).bare_identifier(),
            "E0012"
        );
        assert_eq!(
            LockEntry::new("203.0.113.7", expires).bare_identifier(),
            "203.0.113.7"
        );
    }
}
