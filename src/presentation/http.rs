//! Minimal HTTP response representation for action callbacks.
//!
//! The host owns the actual HTTP server; the plugin only decides status and
//! body.

use serde_json::json;

use crate::domain::errors::{PluginError, ProtocolError};

/// Status and body returned to the host for one callback invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON response body.
    pub body: String,
}

impl CallbackResponse {
    /// The minimal success acknowledgement.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: 200,
            body: json!({"status": "ok"}).to_string(),
        }
    }

    /// Maps a plugin error to its status code and an error body.
    #[must_use]
    pub fn from_error(error: &PluginError) -> Self {
        Self {
            status: status_for(error),
            body: json!({"error": error.to_string()}).to_string(),
        }
    }
}

fn status_for(error: &PluginError) -> u16 {
    match error {
        PluginError::Parse(_) => 400,
        PluginError::Protocol(protocol) => match protocol {
            ProtocolError::MissingActingUser => 401,
            ProtocolError::UserMismatch => 403,
            ProtocolError::UnknownCallback { .. } => 404,
            _ => 400,
        },
        PluginError::Configuration(_) | PluginError::Host(_) => 500,
        PluginError::Provider(_) => 503,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{ConfigurationError, ProviderError};

    #[test]
    fn test_status_mapping() {
        let cases: Vec<(PluginError, u16)> = vec![
            (ProtocolError::missing_field("cursor").into(), 400),
            (ProtocolError::MissingActingUser.into(), 401),
            (ProtocolError::UserMismatch.into(), 403),
            (ProtocolError::unknown_callback("/nope").into(), 404),
            (ConfigurationError::NotConfigured.into(), 500),
            (ProviderError::network("giphy", "down").into(), 503),
        ];
        for (error, expected) in cases {
            assert_eq!(CallbackResponse::from_error(&error).status, expected);
        }
    }

    #[test]
    fn test_ok_acknowledgement() {
        let response = CallbackResponse::ok();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"status":"ok"}"#);
    }
}
