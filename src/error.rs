use thiserror::Error;

/// Client-side error taxonomy.
///
/// Transport failures (no response received, including the request timeout)
/// and server-reported failures (non-2xx with a structured error body) are
/// kept apart so callers can surface the server's own message when there is
/// one.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No response received: DNS, connect, TLS, or timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server replied with a non-2xx status. `message` carries the body's
    /// `error` field when present, the status reason otherwise.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Session state could not be read or written.
    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status of the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Server-supplied error message, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
