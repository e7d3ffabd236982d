//! Activation gate for the meeting host

/// Host marker a page address must contain
pub const DEFAULT_HOST_MARKER: &str = "tldv.io";

/// Checks that a page belongs to the supported meeting host before any
/// page access happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationGate {
    host_marker: String,
}

impl ActivationGate {
    pub fn new(host_marker: impl Into<String>) -> Self {
        Self {
            host_marker: host_marker.into(),
        }
    }

    pub fn host_marker(&self) -> &str {
        &self.host_marker
    }

    /// Whether the page address contains the host marker
    pub fn allows(&self, page_url: &str) -> bool {
        page_url.contains(&self.host_marker)
    }
}

impl Default for ActivationGate {
    fn default() -> Self {
        Self::new(DEFAULT_HOST_MARKER)
    }
}
