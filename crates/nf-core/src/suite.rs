//! The four generated suites

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A family of combinations generated for every catalog kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuiteKind {
    /// Scalar argument with an inlined value
    NonlistArgumentNullability,
    /// List argument with an inlined value
    ListArgumentNullability,
    /// Scalar argument passed through a variable
    NonlistArgumentWithVariablesNullability,
    /// List argument passed through a variable
    ListArgumentWithVariablesNullability,
}

impl SuiteKind {
    /// All suites in generation order
    pub const ALL: [SuiteKind; 4] = [
        SuiteKind::NonlistArgumentNullability,
        SuiteKind::ListArgumentNullability,
        SuiteKind::NonlistArgumentWithVariablesNullability,
        SuiteKind::ListArgumentWithVariablesNullability,
    ];

    /// Name used as the test name prefix
    pub fn name(self) -> &'static str {
        match self {
            SuiteKind::NonlistArgumentNullability => "nonlist_argument_nullability",
            SuiteKind::ListArgumentNullability => "list_argument_nullability",
            SuiteKind::NonlistArgumentWithVariablesNullability => {
                "nonlist_argument_with_variables_nullability"
            }
            SuiteKind::ListArgumentWithVariablesNullability => {
                "list_argument_with_variables_nullability"
            }
        }
    }

    /// Whether the argument is list-wrapped
    pub fn uses_list(self) -> bool {
        matches!(
            self,
            SuiteKind::ListArgumentNullability | SuiteKind::ListArgumentWithVariablesNullability
        )
    }

    /// Whether the argument is passed through `$var1`
    pub fn uses_variables(self) -> bool {
        matches!(
            self,
            SuiteKind::NonlistArgumentWithVariablesNullability
                | SuiteKind::ListArgumentWithVariablesNullability
        )
    }
}

impl fmt::Display for SuiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SuiteKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SuiteKind::ALL
            .into_iter()
            .find(|suite| suite.name() == s)
            .ok_or_else(|| CoreError::UnknownSuite {
                name: s.to_string(),
                known: SuiteKind::ALL.map(SuiteKind::name).join(", "),
            })
    }
}
