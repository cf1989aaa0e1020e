//! Error types for nf-oracle

use thiserror::Error;

/// Oracle invocation errors
#[derive(Error, Debug)]
pub enum OracleError {
    /// Engine process could not be started (O001)
    #[error("[O001] Failed to start oracle '{program}': {source}")]
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },

    /// Pipe to or from the engine failed (O002)
    #[error("[O002] Oracle IO failed: {0}")]
    Io(#[from] std::io::Error),

    /// Engine closed its output before answering (O003)
    #[error("[O003] Oracle process exited before answering")]
    Terminated,

    /// Engine answered something that is not a reply (O004)
    #[error("[O004] Malformed oracle reply: {0}")]
    Protocol(String),

    /// Engine rejected the request (O005)
    #[error("[O005] Oracle rejected request: {0}")]
    Rejected(String),

    /// Engine is not usable on this machine (O006)
    #[error("[O006] Oracle unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for OracleError
pub type OracleResult<T> = Result<T, OracleError>;

impl From<serde_json::Error> for OracleError {
    fn from(err: serde_json::Error) -> Self {
        OracleError::Protocol(err.to_string())
    }
}
