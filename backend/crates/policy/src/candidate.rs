//! Password Candidate
//!
//! Ephemeral value holding candidate password text during evaluation.
//! Never persisted, never logged, zeroized when dropped.

use std::fmt;

use kernel::text;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Candidate password under evaluation
///
/// Construction sanitizes the input down to printable ASCII, so the
/// format scan never sees full-width, control, or IME-composed
/// characters.
///
/// Does not implement `Clone` to prevent accidental copies; `Debug`
/// output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PasswordCandidate(String);

impl PasswordCandidate {
    /// Create a candidate, applying the boundary sanitizer
    pub fn new(raw: &str) -> Self {
        Self(text::sanitize(raw))
    }

    /// Evaluation-time access to the sanitized text
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Sanitized length in characters
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for PasswordCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PasswordCandidate")
            .field(&"[REDACTED]")
            .finish()
    }
}
