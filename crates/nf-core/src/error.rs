//! Error types for nf-core

use thiserror::Error;

/// Core error type for nullfuzz
#[derive(Error, Debug)]
pub enum CoreError {
    /// N001: Kind name is not in the type catalog
    #[error("[N001] Unknown type kind '{kind}'. Known kinds: {known}")]
    UnknownKind { kind: String, known: String },

    /// N002: Suite name is not one of the four generated suites
    #[error("[N002] Unknown suite '{name}'. Known suites: {known}")]
    UnknownSuite { name: String, known: String },

    /// N003: Configuration file not found
    #[error("[N003] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// N004: Invalid configuration value
    #[error("[N004] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// N005: Malformed GraphQL type reference
    #[error("[N005] Invalid type reference '{text}': {reason}")]
    InvalidTypeRef { text: String, reason: String },

    /// N006: IO error with file path context
    #[error("[N006] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// N007: YAML parse error
    #[error("[N007] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
