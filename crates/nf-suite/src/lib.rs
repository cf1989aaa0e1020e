//! nf-suite - Combination driver for nullfuzz
//!
//! This crate plans the four suites as flat, ordered lists of combinations
//! and runs them one at a time through the oracle and the Lua emitter.

pub mod error;
pub mod plan;
pub mod runner;

pub use error::{SuiteError, SuiteResult};
pub use plan::{plan, plan_suite, PlannedCase};
pub use runner::{generate, RenderedCase, RunSummary, SuiteRunner};
