use innovalex_db::RemoteError;

/// Failure of a store operation.
///
/// Network errors, backend rejections and authorization denials all
/// surface as [`StoreError::Remote`] carrying the backend's message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// A create was attempted with nobody signed in.
    #[error("Not signed in")]
    NotSignedIn,

    #[error("Remote operation failed: {0}")]
    Remote(String),
}

impl From<RemoteError> for StoreError {
    fn from(err: RemoteError) -> Self {
        StoreError::Remote(err.to_string())
    }
}

/// Invalid or missing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}
