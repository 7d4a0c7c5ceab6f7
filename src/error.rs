use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Request error: {0}")]
    RequestError(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Inference API error (status {status}): {body}")]
    RemoteError { status: u16, body: String },

    /// Image handling failed: response bytes that do not decode as an
    /// image, or a decoded image that could not be re-encoded or written
    /// to disk.
    #[error("Decode error: {0}")]
    DecodeError(String),
}

impl InferenceError {
    /// True when the failure came back from the service itself rather than
    /// from this process or the network path.
    pub fn is_remote(&self) -> bool {
        matches!(self, InferenceError::RemoteError { .. })
    }

    /// HTTP status of a remote failure, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            InferenceError::RemoteError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, InferenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_preserves_status_and_body() {
        let err = InferenceError::RemoteError {
            status: 503,
            body: "{\"error\":\"Model sd-community/sdxl-flash is currently loading\"}".to_string(),
        };
        assert!(err.is_remote());
        assert_eq!(err.status(), Some(503));
        let rendered = err.to_string();
        assert!(rendered.contains("503"));
        assert!(rendered.contains("currently loading"));
    }

    #[test]
    fn non_remote_errors_have_no_status() {
        let err = InferenceError::DecodeError("unknown image format".to_string());
        assert!(!err.is_remote());
        assert_eq!(err.status(), None);
    }
}
