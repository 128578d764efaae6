//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary shared by
//! the security modules:
//! - Printable-ASCII text sanitation applied at every input boundary
//! - Composite lock-key parsing
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod lock_key;
pub mod text;
