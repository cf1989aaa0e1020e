//! Expected outcome of one generated case

use nf_core::{translate, OracleResponse};

/// How the oracle settled a combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOutcome {
    /// Data only
    Success,
    /// Error only
    Error,
    /// Both data and an error; a known divergence from the Lua library
    Divergent,
    /// Neither data nor an error
    Empty,
}

/// Expected data and error, derived independently from an oracle response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    /// Compact JSON of the response data
    pub data: Option<String>,
    /// Translated first error message
    pub error: Option<String>,
}

impl Expectation {
    pub fn from_response(response: &OracleResponse) -> Self {
        Self {
            data: response.data.as_ref().map(|data| data.to_string()),
            error: response.first_error_message().map(translate),
        }
    }

    pub fn outcome(&self) -> CaseOutcome {
        match (&self.data, &self.error) {
            (Some(_), Some(_)) => CaseOutcome::Divergent,
            (Some(_), None) => CaseOutcome::Success,
            (None, Some(_)) => CaseOutcome::Error,
            (None, None) => CaseOutcome::Empty,
        }
    }
}
