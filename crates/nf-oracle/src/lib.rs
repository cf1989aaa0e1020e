//! nf-oracle - Oracle layer for nullfuzz
//!
//! This crate provides the `Oracle` trait and the graphql-js backed
//! implementation that runs the reference engine in a long-lived `node`
//! process.

pub mod error;
pub mod graphql_js;
#[cfg(feature = "test-support")]
pub mod testing;
pub mod traits;

pub use error::{OracleError, OracleResult};
pub use graphql_js::GraphqlJsOracle;
pub use traits::Oracle;
