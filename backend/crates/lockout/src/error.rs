//! Lockout Error Types
//!
//! Failures at the lockout store boundary. Everything here is caught
//! and converted to a user-visible, non-fatal state by the admin view;
//! nothing propagates far enough to terminate the hosting process.

use thiserror::Error;

/// Lockout-specific result type alias
pub type LockoutResult<T> = Result<T, LockoutError>;

/// Failures talking to the server-side lockout registry
#[derive(Debug, Error)]
pub enum LockoutError {
    /// HTTP transport failure (connect, timeout, TLS)
    #[error("lockout service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Store answered with a non-success status
    #[error("lockout service rejected the request (status {status})")]
    Rejected { status: u16 },

    /// Lock listing payload could not be decoded
    #[error("lockout service returned an unreadable payload")]
    Payload(#[source] serde_json::Error),
}
