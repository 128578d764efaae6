//! Infrastructure Layer
//!
//! HTTP implementation of the lock store contract.

pub mod http;

pub use http::HttpLockStore;
