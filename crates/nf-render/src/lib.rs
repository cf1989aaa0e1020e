//! nf-render - Lua rendering layer for nullfuzz
//!
//! This crate turns oracle results into luatest source: the fixed file header,
//! one test function per combination, and the value-to-Lua conversion both
//! rely on.

pub mod emitter;
pub mod error;
pub mod expectation;
pub mod lua;

pub use emitter::{CaseInput, EmitterSettings, LuaEmitter};
pub use error::{RenderError, RenderResult};
pub use expectation::{CaseOutcome, Expectation};
