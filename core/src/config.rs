//! Client configuration.

use std::time::Duration;

/// Where the directory service lives and how long a single request may take.
///
/// `timeout: None` means the request waits as long as the transport allows.
/// There is no retry policy; each operation is exactly one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Base URL of a locally running service, as started by `mock-server`.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3000/api";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
