//! ==============================================================================
//! error.rs - client and renderer errors
//! ==============================================================================
//!
//! purpose:
//!     `ClientError` covers every way a user action can fail before the
//!     store is patched. `RenderError` means a patch found no card or row.
//!
//! ==============================================================================

use std::fmt;

use thiserror::Error;

/// everything that can go wrong between a user action and the backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Server responded with status {status}")]
    Server { status: u16, detail: Option<String> },
    #[error("Missing {0}")]
    MissingInput(MissingField),
    #[error("Unrecognized response: {0}")]
    UnrecognizedResponse(String),
}

impl ClientError {
    /// text for the user-facing notice. only a server-provided detail is
    /// shown verbatim, everything else falls back to `default`
    pub fn user_message(&self, default: &str) -> String {
        match self {
            ClientError::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ClientError::MissingInput(_) => MISSING_INPUT_MESSAGE.to_string(),
            _ => default.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Email,
    Activity,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::Email => f.write_str("email"),
            MissingField::Activity => f.write_str("activity"),
        }
    }
}

pub const MISSING_INPUT_MESSAGE: &str = "Enter an email and choose an activity.";

// ==============================================================================
// render errors
// ==============================================================================

/// a patch could not find what it was supposed to touch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("no card rendered for activity {0:?}")]
    CardNotFound(String),
    #[error("no row for {email:?} in activity {activity:?}")]
    RowNotFound { activity: String, email: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_detail_is_shown() {
        let err = ClientError::Server {
            status: 400,
            detail: Some("Student already signed up".into()),
        };
        assert_eq!(err.user_message("Could not sign up"), "Student already signed up");
    }

    #[test]
    fn test_server_without_detail_uses_default() {
        let err = ClientError::Server {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message("Could not sign up"), "Could not sign up");
    }

    #[test]
    fn test_network_error_hides_raw_text() {
        let err = ClientError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message("Could not unregister"), "Could not unregister");
        assert!(err.to_string().contains("Failed to fetch"));
    }

    #[test]
    fn test_missing_input_message() {
        let err = ClientError::MissingInput(MissingField::Email);
        assert_eq!(err.user_message("x"), MISSING_INPUT_MESSAGE);
        assert_eq!(err.to_string(), "Missing email");
    }
}
