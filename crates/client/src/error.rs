use notekeeper_core::error::CoreError;

/// Alert shown for any failed request.
pub const TRANSPORT_ALERT: &str = "Could not reach the server.";

/// Errors surfaced by the client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => ClientError::Validation(msg),
            other => ClientError::Validation(other.to_string()),
        }
    }
}

impl ClientError {
    /// True for failures that happened on the way to or at the server.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ClientError::Validation(_))
    }

    /// Text to show the user for this error.
    pub fn alert_message(&self) -> String {
        match self {
            ClientError::Validation(msg) => msg.clone(),
            ClientError::Request(_) | ClientError::Status { .. } => TRANSPORT_ALERT.to_string(),
        }
    }
}
