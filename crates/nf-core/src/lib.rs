//! nf-core - Core library for nullfuzz
//!
//! This crate holds everything that does not talk to the outside world:
//! the canonical type catalog, literal sentinels, parameter combinations,
//! the GraphQL schema/query/variables builders, the oracle error translator,
//! the oracle request/response model and the generator configuration.

pub mod builder;
pub mod catalog;
pub mod combination;
pub mod config;
pub mod error;
pub mod literal;
pub mod response;
pub mod suite;
pub mod translate;
pub mod type_ref;

pub use builder::{build_query, build_schema, build_variables, graphql_type};
pub use catalog::{lookup, SampleValue, TypeDescriptor, CATALOG};
pub use combination::{Combination, Nullability, TypeSpec, VariableSpec};
pub use config::{GeneratorConfig, OracleConfig};
pub use error::{CoreError, CoreResult};
pub use literal::Literal;
pub use response::{OracleErrorEntry, OracleRequest, OracleResponse};
pub use suite::SuiteKind;
pub use translate::{translate, ErrorShape};
pub use type_ref::TypeRef;
