//! Error types for nf-suite

use nf_core::CoreError;
use nf_oracle::OracleError;
use nf_render::RenderError;
use thiserror::Error;

/// Generation errors
#[derive(Error, Debug)]
pub enum SuiteError {
    /// Oracle failed on a case (S001)
    #[error("[S001] Oracle failed on case '{case}': {source}")]
    Oracle { case: String, source: OracleError },

    /// Rendering failed (S002)
    #[error("[S002] {0}")]
    Render(#[from] RenderError),

    /// Writing generated output failed (S003)
    #[error("[S003] Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Core error
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for SuiteError
pub type SuiteResult<T> = Result<T, SuiteError>;
