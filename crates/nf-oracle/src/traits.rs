//! Oracle trait definition

use crate::error::OracleResult;
use async_trait::async_trait;
use nf_core::{OracleRequest, OracleResponse};

/// Reference execution engine
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Execute one request and wait for its settled result
    async fn execute(&self, request: &OracleRequest) -> OracleResult<OracleResponse>;

    /// Engine identifier for logging
    fn engine_name(&self) -> &'static str;
}
