//! Literal values with the two "no value" sentinels

use crate::catalog::SampleValue;
use serde_json::Value as JsonValue;

/// A value fed to an argument, a variable, or a variable default.
///
/// Lua distinguishes `nil` (nothing at all) from `box.NULL` (an explicit
/// null), so both sentinels are kept apart all the way to the emitter.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// No value (`nil`)
    Absent,
    /// Explicit null (`box.NULL`)
    Null,
    /// A concrete sample value
    Value(SampleValue),
    /// A list of literals
    List(Vec<Literal>),
}

impl Literal {
    /// Single-element list wrapping `item`
    pub fn list_of(item: Literal) -> Self {
        Literal::List(vec![item])
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Literal::Absent)
    }

    /// JSON form used in a variables mapping.
    ///
    /// Returns `None` for `Absent`; absent list elements are skipped, so
    /// `[Absent]` becomes `[]`.
    pub fn to_json(&self) -> Option<JsonValue> {
        match self {
            Literal::Absent => None,
            Literal::Null => Some(JsonValue::Null),
            Literal::Value(v) => Some(v.to_json()),
            Literal::List(items) => Some(JsonValue::Array(
                items.iter().filter_map(Literal::to_json).collect(),
            )),
        }
    }
}

impl From<SampleValue> for Literal {
    fn from(value: SampleValue) -> Self {
        Literal::Value(value)
    }
}
