use super::*;
use nf_core::catalog::{lookup, SampleValue};
use nf_core::{translate, Combination, Literal, Nullability, TypeSpec};
use serde_json::json;

#[test]
fn test_parse_reply_response() {
    let response =
        parse_reply(r#"{"response":{"data":{"test":{"arg1":true}}}}"#).unwrap();
    assert_eq!(response.data, Some(json!({ "test": { "arg1": true } })));
    assert_eq!(response.errors, None);
}

#[test]
fn test_parse_reply_fatal() {
    let err = parse_reply(r#"{"fatal":"Syntax Error: Unexpected Name \"typ\"."}"#).unwrap_err();
    assert!(matches!(err, OracleError::Rejected(_)));
    assert!(err.to_string().contains("[O005]"));
}

#[test]
fn test_parse_reply_garbage() {
    assert!(matches!(
        parse_reply("not json").unwrap_err(),
        OracleError::Protocol(_)
    ));
    assert!(matches!(
        parse_reply("{}").unwrap_err(),
        OracleError::Protocol(_)
    ));
}

#[tokio::test]
async fn test_spawn_missing_program() {
    let config = OracleConfig {
        node: "/nonexistent/node-binary".to_string(),
        node_path: None,
    };
    let err = GraphqlJsOracle::spawn(&config).unwrap_err();
    assert!(matches!(err, OracleError::SpawnFailed { .. }));
}

/// Start the real engine, or `None` when node or graphql-js is not installed
async fn real_oracle() -> Option<GraphqlJsOracle> {
    let config = OracleConfig::default();
    if let Err(e) = GraphqlJsOracle::probe(&config).await {
        eprintln!("skipping graphql-js test: {e}");
        return None;
    }
    Some(GraphqlJsOracle::spawn(&config).unwrap())
}

#[tokio::test]
async fn test_real_engine_non_null_boolean_rejects_null() {
    let Some(oracle) = real_oracle().await else {
        return;
    };
    let combination = Combination::inline(
        TypeSpec::named(lookup("boolean_true").unwrap(), Nullability::NonNullable),
        Literal::Null,
    );
    let response = oracle
        .execute(&OracleRequest::from_combination(&combination))
        .await
        .unwrap();

    assert_eq!(response.data, None);
    assert_eq!(
        translate(response.first_error_message().unwrap()),
        r#"Expected non-null for "NonNull(Boolean)", got null"#
    );
    oracle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_real_engine_nullable_int_echoes_value() {
    let Some(oracle) = real_oracle().await else {
        return;
    };
    let combination = Combination::inline(
        TypeSpec::named(lookup("int").unwrap(), Nullability::Nullable),
        SampleValue::Int(1 << 30).into(),
    );
    let response = oracle
        .execute(&OracleRequest::from_combination(&combination))
        .await
        .unwrap();

    assert_eq!(
        response.data,
        Some(json!({ "test": { "arg1": 1073741824 } }))
    );
    assert_eq!(response.errors, None);
    oracle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_real_engine_reports_bad_schema() {
    let Some(oracle) = real_oracle().await else {
        return;
    };
    let request = OracleRequest {
        schema: "typ Query {".to_string(),
        query: "{ test }".to_string(),
        variables: None,
    };
    let err = oracle.execute(&request).await.unwrap_err();
    assert!(matches!(err, OracleError::Rejected(_)));

    // The session survives a rejected request
    let combination = Combination::inline(
        TypeSpec::named(lookup("int").unwrap(), Nullability::Nullable),
        Literal::Null,
    );
    let response = oracle
        .execute(&OracleRequest::from_combination(&combination))
        .await
        .unwrap();
    assert_eq!(response.data, Some(json!({ "test": { "arg1": null } })));
}
