/// Errors from the remote tables and auth services.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Backend error ({status}): {message}")]
    Api {
        status: u16,
        /// Backend error code when the body carried one (e.g. `"PGRST116"`).
        code: Option<String>,
        message: String,
    },

    /// A returned row did not match the expected shape.
    #[error("Failed to decode {table} row: {source}")]
    Decode {
        table: String,
        source: serde_json::Error,
    },

    /// A request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(serde_json::Error),

    /// Client-side configuration cannot form a valid request.
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// A single-row operation matched nothing.
    #[error("No row in {table} matched {filter}")]
    NotFound { table: String, filter: String },
}

impl RemoteError {
    /// HTTP status for API errors, `None` for transport and decode failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Api { status, .. } => Some(*status),
            RemoteError::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}
