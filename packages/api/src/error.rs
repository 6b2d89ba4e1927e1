use thiserror::Error;

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Http {
        status: u16,
        /// `message` field of the error body, when the backend sent one.
        message: Option<String>,
    },
    /// The request never got an answer (offline, DNS, CORS, refused...).
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("invalid request payload: {0}")]
    Payload(String),
}

impl ApiError {
    /// Text to show the user: the backend's own message when present, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Http {
                status: status.as_u16(),
                message: None,
            }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_backend_message() {
        let err = ApiError::Http {
            status: 409,
            message: Some("Email already registered".into()),
        };
        assert_eq!(err.user_message("Registration failed"), "Email already registered");
    }

    #[test]
    fn user_message_falls_back() {
        let blank = ApiError::Http {
            status: 500,
            message: Some("  ".into()),
        };
        assert_eq!(blank.user_message("Login failed"), "Login failed");
        assert_eq!(
            ApiError::Transport("connection refused".into()).user_message("Login failed"),
            "Login failed"
        );
    }

    #[test]
    fn only_transport_counts_as_transport() {
        assert!(ApiError::Transport("x".into()).is_transport());
        assert!(!ApiError::Decode("x".into()).is_transport());
    }
}
