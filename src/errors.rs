use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed textual channel id
    #[error("invalid channel id: {0}, should be in bbbbbb:iiii:p format")]
    InvalidChannelIdentifier(String),

    /// Any failure from the node fetch, surfaced verbatim
    #[error(transparent)]
    UpstreamFetch(#[from] RpcError),

    /// Malformed --peer public key
    #[error("invalid peer pubkey: {0}")]
    InvalidPeer(String),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data validation/encoding
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Node RPC error types
#[derive(Error, Debug)]
pub enum RpcError {
    /// Could not build the client or reach the node
    #[error("failed to connect to lnd: {0}")]
    ConnectionFailed(String),

    /// TLS certificate or macaroon could not be loaded
    #[error("failed to load credentials: {0}")]
    Credentials(String),

    /// Transport-level failure during a call
    #[error("{method} failed: {message}")]
    CallFailed { method: String, message: String },

    /// Node answered with a non-success status
    #[error("{method} failed: HTTP {status}: {body}")]
    Status {
        method: String,
        status: u16,
        body: String,
    },

    /// Failed to deserialise response data
    #[error("Deserialisation failed: {0}")]
    DeserialisationFailed(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for RPC operations
pub type RpcResult<T> = Result<T, RpcError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
