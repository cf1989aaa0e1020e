use super::*;

#[test]
fn test_every_kind_has_a_wire_type() {
    for descriptor in CATALOG {
        assert!(
            !descriptor.wire_type.is_empty(),
            "{} has an empty wire type",
            descriptor.kind
        );
        assert!(!descriptor.lua_type.is_empty());
    }
}

#[test]
fn test_kind_names_are_unique() {
    let mut names = kind_names();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn test_lookup_known_kind() {
    let int = lookup("int").unwrap();
    assert_eq!(int.wire_type, "Int");
    assert_eq!(int.value, SampleValue::Int(1073741824));
    assert_eq!(int.default, SampleValue::Int(0));
}

#[test]
fn test_lookup_unknown_kind_fails() {
    let err = lookup("decimal").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("[N001]"));
    assert!(msg.contains("decimal"));
    assert!(msg.contains("boolean_true"));
}

#[test]
fn test_declarations_come_in_pairs() {
    // A kind that needs an SDL declaration needs the Lua counterpart too
    for descriptor in CATALOG {
        assert_eq!(
            descriptor.sdl_declaration.is_some(),
            descriptor.lua_declaration.is_some(),
            "{} declarations out of sync",
            descriptor.kind
        );
    }
}

#[test]
fn test_enum_declarations_mention_wire_type() {
    let descriptor = lookup("enum").unwrap();
    assert!(descriptor.is_enum());
    assert!(descriptor
        .sdl_declaration
        .unwrap()
        .starts_with("enum MyEnum {"));
    assert!(descriptor
        .lua_declaration
        .unwrap()
        .contains("name = 'MyEnum'"));
}

#[test]
fn test_integral_float_json_has_no_fraction() {
    assert_eq!(SampleValue::Float(0.0).to_json().to_string(), "0");
    assert_eq!(SampleValue::Float(1.1111111).to_json().to_string(), "1.1111111");
}

#[test]
fn test_enum_json_is_a_string() {
    assert_eq!(SampleValue::Enum("b").to_json(), serde_json::json!("b"));
}
