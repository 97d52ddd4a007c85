//! Error types for the `game_saver` crate.

/// All errors that can occur while saving, loading or configuring.
#[derive(Debug, thiserror::Error)]
pub enum GameSaverError {
    /// The caller omitted a required field or supplied an unusable identifier.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A storage backend failed to read or persist content.
    #[error("Storage failed: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),

    /// A persisted record exists but could not be parsed.
    #[error("Corrupt save data for id '{id}': {source}")]
    Corrupt {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// The server configuration is invalid or could not be loaded.
    #[error("Config error: {0}")]
    Config(String),

    /// The HTTP server failed to ignite or launch.
    #[error("Server error: {0}")]
    Server(String),
}

impl GameSaverError {
    /// Wrap any I/O-like failure as a [`GameSaverError::Storage`].
    pub fn storage(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Storage(err.into())
    }
}

/// A type alias for `Result<T, GameSaverError>`.
pub type Result<T> = std::result::Result<T, GameSaverError>;
