//! ==============================================================================
//! config.rs - client settings
//! ==============================================================================
//!
//! purpose:
//!     where the backend lives and how long notices stay up. the dashboard
//!     fills `base_url` from the page location.
//!
//! ==============================================================================

use crate::notice::NOTICE_DISMISS_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// prefix for every request, empty means same origin
    pub base_url: String,
    pub notice_dismiss_ms: u32,
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            notice_dismiss_ms: NOTICE_DISMISS_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "");
        assert_eq!(config.notice_dismiss_ms, 4_500);
    }

    #[test]
    fn test_with_base_url_keeps_dismiss_delay() {
        let config = ClientConfig::with_base_url("http://localhost:8000");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.notice_dismiss_ms, NOTICE_DISMISS_MS);
    }
}
