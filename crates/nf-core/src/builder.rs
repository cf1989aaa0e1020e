//! GraphQL schema, query and variables builders
//!
//! All three are pure functions of a [`Combination`]. The produced documents
//! always describe the same shape: `Query.test(arg1) -> result.arg1`.

use crate::catalog::SampleValue;
use crate::combination::{Combination, TypeSpec};
use crate::literal::Literal;
use serde_json::{Map, Value as JsonValue};

/// Name of the single field argument
pub const ARGUMENT_NAME: &str = "arg1";

/// Name of the single query variable
pub const VARIABLE_NAME: &str = "var1";

/// GraphQL type notation for a type spec (`Int!`, `[MyEnum!]`, ...)
pub fn graphql_type(spec: &TypeSpec) -> String {
    match spec {
        TypeSpec::Named { kind, nullability } => {
            format!("{}{}", kind.wire_type, nullability.suffix())
        }
        TypeSpec::List {
            nullability,
            inner,
            inner_nullability,
        } => format!(
            "[{}{}]{}",
            inner.wire_type,
            inner_nullability.suffix(),
            nullability.suffix()
        ),
    }
}

/// Build the SDL document for a combination
pub fn build_schema(combination: &Combination) -> String {
    let ty = graphql_type(&combination.argument);
    let declaration = combination
        .argument
        .element_kind()
        .sdl_declaration
        .map(|d| format!("{d}\n"))
        .unwrap_or_default();

    format!(
        "{declaration}type result {{\n  {ARGUMENT_NAME}: {ty}\n}}\n\ntype Query {{\n  test({ARGUMENT_NAME}: {ty}): result\n}}\n"
    )
}

/// Build the query document for a combination
pub fn build_query(combination: &Combination) -> String {
    match &combination.variable {
        Some(variable) => {
            let ty = graphql_type(&variable.ty);
            let default = render_literal(&variable.default)
                .map(|d| format!(" = {d}"))
                .unwrap_or_default();
            format!(
                "query MyQuery(${VARIABLE_NAME}: {ty}{default}) {{ test({ARGUMENT_NAME}: ${VARIABLE_NAME}) {{ {ARGUMENT_NAME} }} }}"
            )
        }
        None => {
            // There is no way to leave a written argument without a value, so an
            // absent argument is passed as `null`
            let value =
                render_literal(&combination.argument_value).unwrap_or_else(|| "null".to_string());
            format!("query MyQuery {{ test({ARGUMENT_NAME}: {value}) {{ {ARGUMENT_NAME} }} }}")
        }
    }
}

/// Build the variables mapping for a combination.
///
/// Returns `None` when no variable is used or its runtime value is absent.
pub fn build_variables(combination: &Combination) -> Option<Map<String, JsonValue>> {
    let variable = combination.variable.as_ref()?;
    let value = variable.value.to_json()?;

    let mut variables = Map::new();
    variables.insert(VARIABLE_NAME.to_string(), value);
    Some(variables)
}

/// Render a literal in GraphQL query syntax.
///
/// `Absent` has no rendering (`None`); callers decide whether that means
/// `null` or leaving a clause out. Absent list elements are skipped, so
/// `[Absent]` renders as `[]`.
pub fn render_literal(literal: &Literal) -> Option<String> {
    match literal {
        Literal::Absent => None,
        Literal::Null => Some("null".to_string()),
        Literal::Value(value) => Some(render_value(value)),
        Literal::List(items) => {
            let rendered: Vec<String> = items.iter().filter_map(render_literal).collect();
            Some(format!("[{}]", rendered.join(",")))
        }
    }
}

fn render_value(value: &SampleValue) -> String {
    match value {
        SampleValue::Enum(name) => (*name).to_string(),
        other => other.to_json().to_string(),
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
