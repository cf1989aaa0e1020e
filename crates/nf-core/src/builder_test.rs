use super::*;
use crate::catalog::lookup;
use crate::combination::{Nullability, VariableSpec};

fn int_list(nullability: Nullability, inner: Nullability) -> TypeSpec {
    TypeSpec::list(nullability, lookup("int").unwrap(), inner)
}

#[test]
fn test_graphql_type_notation() {
    let int = lookup("int").unwrap();
    assert_eq!(
        graphql_type(&TypeSpec::named(int, Nullability::Nullable)),
        "Int"
    );
    assert_eq!(
        graphql_type(&TypeSpec::named(int, Nullability::NonNullable)),
        "Int!"
    );
    assert_eq!(
        graphql_type(&int_list(Nullability::Nullable, Nullability::NonNullable)),
        "[Int!]"
    );
    assert_eq!(
        graphql_type(&int_list(Nullability::NonNullable, Nullability::NonNullable)),
        "[Int!]!"
    );
}

#[test]
fn test_render_list_with_absent_is_empty() {
    assert_eq!(
        render_literal(&Literal::list_of(Literal::Absent)).as_deref(),
        Some("[]")
    );
}

#[test]
fn test_render_list_with_null() {
    assert_eq!(
        render_literal(&Literal::list_of(Literal::Null)).as_deref(),
        Some("[null]")
    );
}

#[test]
fn test_render_list_with_value_is_json() {
    let value = Literal::list_of(SampleValue::Float(1.1111111).into());
    assert_eq!(render_literal(&value).as_deref(), Some("[1.1111111]"));

    let value = Literal::list_of(SampleValue::String("Test string").into());
    assert_eq!(render_literal(&value).as_deref(), Some(r#"["Test string"]"#));
}

#[test]
fn test_render_enum_is_bare_identifier() {
    let scalar = Literal::Value(SampleValue::Enum("b"));
    assert_eq!(render_literal(&scalar).as_deref(), Some("b"));

    let list = Literal::list_of(SampleValue::Enum("b").into());
    assert_eq!(render_literal(&list).as_deref(), Some("[b]"));
}

#[test]
fn test_render_absent_has_no_text() {
    assert_eq!(render_literal(&Literal::Absent), None);
    assert_eq!(render_literal(&Literal::Null).as_deref(), Some("null"));
}

#[test]
fn test_build_schema_scalar() {
    let combination = Combination::inline(
        TypeSpec::named(lookup("boolean_true").unwrap(), Nullability::NonNullable),
        Literal::Null,
    );
    let schema = build_schema(&combination);
    assert!(schema.contains("type result {\n  arg1: Boolean!\n}"));
    assert!(schema.contains("test(arg1: Boolean!): result"));
    assert!(!schema.contains("enum"));
}

#[test]
fn test_build_schema_declares_enum_for_lists() {
    let combination = Combination::inline(
        TypeSpec::list(
            Nullability::Nullable,
            lookup("enum").unwrap(),
            Nullability::NonNullable,
        ),
        Literal::Absent,
    );
    let schema = build_schema(&combination);
    assert!(schema.starts_with("enum MyEnum {"));
    assert!(schema.contains("arg1: [MyEnum!]\n"));
}

#[test]
fn test_build_query_inline_value() {
    let combination = Combination::inline(
        TypeSpec::named(lookup("int").unwrap(), Nullability::Nullable),
        SampleValue::Int(1 << 30).into(),
    );
    assert_eq!(
        build_query(&combination),
        "query MyQuery { test(arg1: 1073741824) { arg1 } }"
    );
    assert_eq!(build_variables(&combination), None);
}

#[test]
fn test_build_query_inline_absent_is_null() {
    let combination = Combination::inline(
        TypeSpec::named(lookup("int").unwrap(), Nullability::Nullable),
        Literal::Absent,
    );
    assert_eq!(
        build_query(&combination),
        "query MyQuery { test(arg1: null) { arg1 } }"
    );
}

#[test]
fn test_build_query_with_variable_default() {
    let int = lookup("int").unwrap();
    let combination = Combination::with_variable(
        TypeSpec::named(int, Nullability::NonNullable),
        VariableSpec {
            ty: TypeSpec::named(int, Nullability::Nullable),
            value: Literal::Absent,
            default: SampleValue::Int(0).into(),
        },
    );
    assert_eq!(
        build_query(&combination),
        "query MyQuery($var1: Int = 0) { test(arg1: $var1) { arg1 } }"
    );
}

#[test]
fn test_build_query_absent_default_is_omitted() {
    let int = lookup("int").unwrap();
    let combination = Combination::with_variable(
        TypeSpec::named(int, Nullability::Nullable),
        VariableSpec {
            ty: TypeSpec::named(int, Nullability::NonNullable),
            value: Literal::Null,
            default: Literal::Absent,
        },
    );
    assert_eq!(
        build_query(&combination),
        "query MyQuery($var1: Int!) { test(arg1: $var1) { arg1 } }"
    );
}

#[test]
fn test_build_query_null_default() {
    let combination = Combination::with_variable(
        int_list(Nullability::Nullable, Nullability::Nullable),
        VariableSpec {
            ty: int_list(Nullability::Nullable, Nullability::Nullable),
            value: Literal::Absent,
            default: Literal::Null,
        },
    );
    assert_eq!(
        build_query(&combination),
        "query MyQuery($var1: [Int] = null) { test(arg1: $var1) { arg1 } }"
    );
}

#[test]
fn test_build_variables() {
    let spec = int_list(Nullability::Nullable, Nullability::Nullable);
    let variables = |value: Literal| {
        build_variables(&Combination::with_variable(
            spec,
            VariableSpec {
                ty: spec,
                value,
                default: Literal::Absent,
            },
        ))
        .map(JsonValue::Object)
    };

    assert_eq!(variables(Literal::Absent), None);
    assert_eq!(
        variables(Literal::Null),
        Some(serde_json::json!({ "var1": null }))
    );
    assert_eq!(
        variables(Literal::list_of(Literal::Absent)),
        Some(serde_json::json!({ "var1": [] }))
    );
    assert_eq!(
        variables(Literal::list_of(Literal::Null)),
        Some(serde_json::json!({ "var1": [null] }))
    );
    assert_eq!(
        variables(Literal::list_of(SampleValue::Int(1 << 30).into())),
        Some(serde_json::json!({ "var1": [1073741824] }))
    );
}

#[test]
fn test_build_variables_enum_is_string() {
    let kind = lookup("enum").unwrap();
    let spec = TypeSpec::named(kind, Nullability::Nullable);
    let combination = Combination::with_variable(
        spec,
        VariableSpec {
            ty: spec,
            value: kind.value.into(),
            default: Literal::Absent,
        },
    );
    assert_eq!(
        build_variables(&combination).map(JsonValue::Object),
        Some(serde_json::json!({ "var1": "b" }))
    );
}
