//! HTTP Lock Store
//!
//! reqwest client for the portal's lockout admin API:
//! - `GET  {base}/admin/locks`
//! - `POST {base}/admin/unlock`    body `{ "code": ... }`
//! - `POST {base}/admin/unlock-ip` body `{ "ip": ... }`

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entry::LockEntry;
use crate::domain::snapshot::LockSnapshot;
use crate::domain::store::LockStore;
use crate::error::{LockoutError, LockoutResult};

/// Wire payload of the lock listing
///
/// Keys map to expiry instants; either map may be absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct LocksResponse {
    ip_locks: HashMap<String, DateTime<Utc>>,
    user_locks: HashMap<String, DateTime<Utc>>,
}

impl LocksResponse {
    fn into_snapshot(self) -> LockSnapshot {
        LockSnapshot {
            ip_locks: to_entries(self.ip_locks),
            user_locks: to_entries(self.user_locks),
        }
    }
}

fn to_entries(raw: HashMap<String, DateTime<Utc>>) -> BTreeMap<String, LockEntry> {
    raw.into_iter()
        .map(|(key, expires_at)| {
            let entry = LockEntry::new(key.clone(), expires_at);
            (key, entry)
        })
        .collect()
}

/// REST client for the server-side lockout registry
#[derive(Debug, Clone)]
pub struct HttpLockStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLockStore {
    /// `base_url` is the auth API root, e.g. `https://portal.example.jp/api/auth`
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn ensure_success(response: &reqwest::Response) -> LockoutResult<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(LockoutError::Rejected {
                status: status.as_u16(),
            })
        }
    }

    async fn post_unlock(&self, path: &str, body: serde_json::Value) -> LockoutResult<()> {
        let response = self.client.post(self.url(path)).json(&body).send().await?;
        Self::ensure_success(&response)?;
        Ok(())
    }
}

impl LockStore for HttpLockStore {
    async fn fetch_locks(&self) -> LockoutResult<LockSnapshot> {
        let response = self.client.get(self.url("admin/locks")).send().await?;
        Self::ensure_success(&response)?;

        let body = response.text().await?;
        let payload: LocksResponse =
            serde_json::from_str(&body).map_err(LockoutError::Payload)?;
        Ok(payload.into_snapshot())
    }

    async fn unlock_user(&self, code: &str) -> LockoutResult<()> {
        self.post_unlock("admin/unlock", serde_json::json!({ "code": code }))
            .await
    }

    async fn unlock_ip(&self, ip: &str) -> LockoutResult<()> {
        self.post_unlock("admin/unlock-ip", serde_json::json!({ "ip": ip }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lock_listing() {
        let body = r#"{
            "ipLocks": { "203.0.113.7": "2030-01-01T00:15:00Z" },
            "userLocks": { "user:E0012": "2030-01-01T00:20:00Z" }
        }"#;

        let payload: LocksResponse = serde_json::from_str(body).unwrap();
        let snapshot = payload.into_snapshot();

        assert_eq!(snapshot.ip_locks.len(), 1);
        assert_eq!(snapshot.user_locks.len(), 1);
        let entry = &snapshot.user_locks["user:E0012"];
        assert_eq!(entry.key, "user:E0012");
        assert_eq!(entry.bare_identifier(), "E0012");
    }

    #[test]
    fn test_decode_tolerates_missing_maps() {
        let payload: LocksResponse = serde_json::from_str("{}").unwrap();
        let snapshot = payload.into_snapshot();
        assert!(snapshot.is_empty());

        let payload: LocksResponse =
            serde_json::from_str(r#"{ "ipLocks": {} }"#).unwrap();
        assert!(payload.into_snapshot().is_empty());
    }

    #[test]
    fn test_entries_are_ordered_for_rendering() {
        let body = r#"{
            "userLocks": {
                "user:E0500": "2030-01-01T00:00:00Z",
                "user:E0012": "2030-01-01T00:00:00Z",
                "user:E0100": "2030-01-01T00:00:00Z"
            }
        }"#;

        let snapshot: LockSnapshot =
            serde_json::from_str::<LocksResponse>(body).unwrap().into_snapshot();
        let keys: Vec<_> = snapshot.user_locks.keys().collect();
        assert_eq!(keys, vec!["user:E0012", "user:E0100", "user:E0500"]);
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let store = HttpLockStore::new(reqwest::Client::new(), "https://portal.example.jp/api/auth/");
        assert_eq!(
            store.url("admin/locks"),
            "https://portal.example.jp/api/auth/admin/locks"
        );
    }
}
