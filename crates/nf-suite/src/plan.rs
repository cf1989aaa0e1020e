//! Suite planning
//!
//! Every suite is a nested Cartesian product over nullabilities and values.
//! Planning materializes the whole product up front, so a case's index is
//! fixed by its position and does not depend on how the oracle schedules work.

use nf_core::{
    Combination, Literal, Nullability, SuiteKind, TypeDescriptor, TypeSpec, VariableSpec,
};

/// One combination scheduled for generation
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedCase {
    pub suite: SuiteKind,
    pub kind: &'static TypeDescriptor,
    /// 1-based position within `(suite, kind)`
    pub index: usize,
    pub combination: Combination,
}

impl PlannedCase {
    /// Test name without the `test_` prefix
    pub fn name(&self) -> String {
        format!("{}_{}_{}", self.suite.name(), self.kind.kind, self.index)
    }
}

/// Values for a scalar position: nil, box.NULL, the sample
fn scalar_values(sample: Literal) -> [Literal; 3] {
    [Literal::Absent, Literal::Null, sample]
}

/// Values for a list position: nil, box.NULL, {}, {box.NULL}, {sample}
fn list_values(sample: Literal) -> [Literal; 5] {
    [
        Literal::Absent,
        Literal::Null,
        Literal::list_of(Literal::Absent),
        Literal::list_of(Literal::Null),
        Literal::list_of(sample),
    ]
}

fn nonlist_argument(kind: &'static TypeDescriptor) -> Vec<Combination> {
    let mut combinations = Vec::new();
    for nullability in Nullability::ALL {
        for value in scalar_values(kind.value.into()) {
            combinations.push(Combination::inline(
                TypeSpec::named(kind, nullability),
                value,
            ));
        }
    }
    combinations
}

fn list_argument(kind: &'static TypeDescriptor) -> Vec<Combination> {
    let mut combinations = Vec::new();
    for nullability in Nullability::ALL {
        for inner_nullability in Nullability::ALL {
            for value in list_values(kind.value.into()) {
                combinations.push(Combination::inline(
                    TypeSpec::list(nullability, kind, inner_nullability),
                    value,
                ));
            }
        }
    }
    combinations
}

fn nonlist_argument_with_variables(kind: &'static TypeDescriptor) -> Vec<Combination> {
    let mut combinations = Vec::new();
    for nullability in Nullability::ALL {
        for variable_nullability in Nullability::ALL {
            for value in scalar_values(kind.value.into()) {
                for default in scalar_values(kind.default.into()) {
                    combinations.push(Combination::with_variable(
                        TypeSpec::named(kind, nullability),
                        VariableSpec {
                            ty: TypeSpec::named(kind, variable_nullability),
                            value: value.clone(),
                            default,
                        },
                    ));
                }
            }
        }
    }
    combinations
}

fn list_argument_with_variables(kind: &'static TypeDescriptor) -> Vec<Combination> {
    let mut combinations = Vec::new();
    for nullability in Nullability::ALL {
        for inner_nullability in Nullability::ALL {
            for variable_nullability in Nullability::ALL {
                for variable_inner_nullability in Nullability::ALL {
                    for value in list_values(kind.value.into()) {
                        for default in list_values(kind.default.into()) {
                            combinations.push(Combination::with_variable(
                                TypeSpec::list(nullability, kind, inner_nullability),
                                VariableSpec {
                                    ty: TypeSpec::list(
                                        variable_nullability,
                                        kind,
                                        variable_inner_nullability,
                                    ),
                                    value: value.clone(),
                                    default,
                                },
                            ));
                        }
                    }
                }
            }
        }
    }
    combinations
}

/// Plan one suite for one kind
pub fn plan_suite(suite: SuiteKind, kind: &'static TypeDescriptor) -> Vec<PlannedCase> {
    let combinations = match suite {
        SuiteKind::NonlistArgumentNullability => nonlist_argument(kind),
        SuiteKind::ListArgumentNullability => list_argument(kind),
        SuiteKind::NonlistArgumentWithVariablesNullability => {
            nonlist_argument_with_variables(kind)
        }
        SuiteKind::ListArgumentWithVariablesNullability => list_argument_with_variables(kind),
    };

    combinations
        .into_iter()
        .enumerate()
        .map(|(i, combination)| PlannedCase {
            suite,
            kind,
            index: i + 1,
            combination,
        })
        .collect()
}

/// Plan every selected suite for every selected kind, suite by suite
pub fn plan(suites: &[SuiteKind], kinds: &[&'static TypeDescriptor]) -> Vec<PlannedCase> {
    suites
        .iter()
        .flat_map(|suite| kinds.iter().flat_map(move |kind| plan_suite(*suite, *kind)))
        .collect()
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
