//! Error types for nf-render

use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Template render error (R001)
    #[error("[R001] Template render error: {0}")]
    Template(String),

    /// Template missing from the environment (R002)
    #[error("[R002] Unknown template '{name}'")]
    UnknownTemplate { name: String },
}

/// Result type alias for RenderError
pub type RenderResult<T> = Result<T, RenderError>;

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => RenderError::UnknownTemplate {
                name: err.detail().unwrap_or_default().to_string(),
            },
            _ => RenderError::Template(err.to_string()),
        }
    }
}
