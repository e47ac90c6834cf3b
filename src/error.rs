//! API Error Type

use thiserror::Error;

use crate::models::ErrorBody;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("server responded with {}{}", .status, .message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a `Status` error from a failed response's status and raw body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message());
        ApiError::Status { status, message }
    }

    /// Text to show the user: the server's own explanation if it sent one
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(m), .. } => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_reads_errors_field() {
        let err = ApiError::from_status(400, r#"{"errors":"User already exists"}"#);
        assert_eq!(err, ApiError::Status { status: 400, message: Some("User already exists".into()) });
        assert_eq!(err.user_message("User registration failed"), "User already exists");
        assert_eq!(err.to_string(), "server responded with 400: User already exists");
    }

    #[test]
    fn test_from_status_non_json_body() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err, ApiError::Status { status: 502, message: None });
        assert_eq!(err.user_message("Login failed. Try again."), "Login failed. Try again.");
        assert_eq!(err.to_string(), "server responded with 502");
    }

    #[test]
    fn test_network_error_uses_fallback() {
        let err = ApiError::Network("Failed to fetch".into());
        assert_eq!(err.user_message("Logout failed"), "Logout failed");
    }
}
