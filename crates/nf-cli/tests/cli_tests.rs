//! Integration tests for the nullfuzz binary

use std::path::Path;
use std::process::Command;

fn nullfuzz_bin() -> String {
    env!("CARGO_BIN_EXE_nullfuzz").to_string()
}

/// Run `nullfuzz` in `dir` and return (stdout, stderr, success).
fn run_in(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(nullfuzz_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute nullfuzz with args {:?}: {}", args, e));
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn run(args: &[&str]) -> (String, String, bool) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    run_in(dir.path(), args)
}

#[test]
fn test_translate_variable_not_provided() {
    let (stdout, _, ok) = run(&[
        "translate",
        r#"Variable "$var1" of required type "Boolean!" was not provided."#,
    ]);
    assert!(ok);
    assert_eq!(stdout.trim(), r#"Variable "var1" expected to be non-null"#);
}

#[test]
fn test_translate_explain_names_shape() {
    let (stdout, _, ok) = run(&[
        "translate",
        "--explain",
        r#"Expected value of type "[Int!]!", found null."#,
    ]);
    assert!(ok);
    assert!(stdout.contains("shape: value_not_null"));
    assert!(stdout.contains(r#"Expected non-null for "NonNull(List(NonNull(Int)))", got null"#));
}

#[test]
fn test_translate_passthrough() {
    let (stdout, _, ok) = run(&["translate", "--explain", "Something else entirely"]);
    assert!(ok);
    assert!(stdout.contains("passed through"));
    assert!(stdout.trim_end().ends_with("Something else entirely"));
}

#[test]
fn test_ls_json_selection() {
    let (stdout, stderr, ok) = run(&[
        "ls",
        "--suites",
        "nonlist_argument_nullability",
        "--kinds",
        "int",
        "--output",
        "json",
    ]);
    assert!(ok, "ls failed: {}", stderr);

    let cases: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let cases = cases.as_array().unwrap();
    assert_eq!(cases.len(), 6);
    assert_eq!(cases[0]["name"], "nonlist_argument_nullability_int_1");
    assert_eq!(cases[0]["argument_type"], "Int");
    assert_eq!(cases[3]["argument_type"], "Int!");
    assert_eq!(
        cases[2]["query"],
        "query MyQuery { test(arg1: 1073741824) { arg1 } }"
    );
}

#[test]
fn test_ls_reads_config_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("nullfuzz.yml"),
        "kinds: [enum]\nsuites: [list_argument_nullability]\n",
    )
    .unwrap();

    let (stdout, stderr, ok) = run_in(dir.path(), &["ls"]);
    assert!(ok, "ls failed: {}", stderr);
    assert!(stdout.contains("list_argument_nullability_enum_20"));
    assert!(!stdout.contains("list_argument_nullability_enum_21"));
    assert!(stdout.contains("20 cases"));
}

#[test]
fn test_catalog_lists_every_kind() {
    let (stdout, _, ok) = run(&["catalog"]);
    assert!(ok);
    for kind in [
        "boolean_true",
        "boolean_false",
        "string",
        "float",
        "int",
        "id",
        "enum",
    ] {
        assert!(stdout.contains(kind), "missing kind {}", kind);
    }
    assert!(stdout.contains("MyEnum"));
}

#[test]
fn test_unknown_config_field_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.yml"), "group: g\nmystery: 1\n").unwrap();

    let (_, stderr, ok) = run_in(dir.path(), &["ls", "--config", "bad.yml"]);
    assert!(!ok);
    assert!(stderr.contains("Failed to load config"));
    assert!(stderr.contains("N007"));
}

#[test]
fn test_unknown_kind_flag_fails() {
    let (_, stderr, ok) = run(&["ls", "--kinds", "decimal"]);
    assert!(!ok);
    assert!(stderr.contains("N001"));
}

#[test]
fn test_generate_without_node_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, stderr, ok) = run_in(
        dir.path(),
        &[
            "generate",
            "--kinds",
            "int",
            "--node",
            "/nonexistent/nullfuzz-node",
            "--output",
            "out.lua",
        ],
    );
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(stderr.contains("graphql-js is not available"));
    assert!(!dir.path().join("out.lua").exists());
}
