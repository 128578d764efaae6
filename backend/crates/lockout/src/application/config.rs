//! Admin View Configuration

use std::time::Duration;

/// Configuration for the lockout admin view
#[derive(Debug, Clone)]
pub struct AdminViewConfig {
    /// The loading indicator only appears when a fetch outlasts this
    /// delay, so fast responses do not flicker
    pub loading_delay: Duration,
}

impl Default for AdminViewConfig {
    fn default() -> Self {
        Self {
            loading_delay: Duration::from_millis(300),
        }
    }
}
