//! Password Policy Engine
//!
//! Single authoritative password acceptability check for the HR portal.
//! A candidate is acceptable when it passes the hard format rules *and*
//! a crack-time strength estimate meets the score the target account's
//! privilege level mandates.
//!
//! Structure:
//! - `candidate` - sanitized, zeroized password text
//! - `format` - character-class and length rules
//! - `dictionary` - email-derived "known user input" tokens
//! - `oracle` - pluggable strength estimator (zxcvbn in production)
//! - `engine` - the evaluator combining the above
//! - `sequence` - ordering guard for in-flight re-evaluations
//!
//! ## Security Model
//! - Raw candidates are never logged; `Debug` output is redacted
//! - Candidate memory is zeroized on drop
//! - The engine holds no cache: every role or email change requires a
//!   fresh evaluation

pub mod candidate;
pub mod context;
pub mod dictionary;
pub mod engine;
pub mod format;
pub mod oracle;
pub mod sequence;

pub use candidate::PasswordCandidate;
pub use context::{PolicyContext, RequiredScore, StaffRole};
pub use dictionary::derive_dictionary;
pub use engine::{PasswordPolicy, PolicyViolation, StrengthVerdict};
pub use format::{FormatCheck, check_format};
pub use oracle::{StrengthOracle, ZxcvbnOracle};
pub use sequence::{EvalSequence, EvalTicket};

// Re-export the boundary sanitizer so callers need only this crate
pub use kernel::text::sanitize;
