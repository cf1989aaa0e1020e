use super::*;

fn parse(text: &str) -> TypeRef {
    text.parse().unwrap()
}

#[test]
fn test_parse_named() {
    assert_eq!(parse("Int"), TypeRef::Named("Int".to_string()));
}

#[test]
fn test_parse_wrapped() {
    assert_eq!(
        parse("[Int!]!"),
        TypeRef::NonNull(Box::new(TypeRef::List(Box::new(TypeRef::NonNull(
            Box::new(TypeRef::Named("Int".to_string()))
        )))))
    );
}

#[test]
fn test_display_round_trips_notation() {
    for text in ["MyEnum", "ID!", "[Float]", "[Boolean!]", "[String]!", "[Int!]!"] {
        assert_eq!(parse(text).to_string(), text);
    }
}

#[test]
fn test_lua_notation() {
    assert_eq!(parse("Boolean!").lua_notation(), "NonNull(Boolean)");
    assert_eq!(parse("[Int]!").lua_notation(), "NonNull(List(Int))");
    assert_eq!(parse("[Int!]").lua_notation(), "List(NonNull(Int))");
    assert_eq!(
        parse("[MyEnum!]!").lua_notation(),
        "NonNull(List(NonNull(MyEnum)))"
    );
}

#[test]
fn test_contains_non_null() {
    assert!(!parse("Int").contains_non_null());
    assert!(!parse("[Int]").contains_non_null());
    assert!(parse("[Int!]").contains_non_null());
    assert!(parse("Int!").contains_non_null());
}

#[test]
fn test_parse_rejects_malformed() {
    for text in ["", "[Int", "Int!!", "Int]", "9Lives", "[!]"] {
        let err = text.parse::<TypeRef>().unwrap_err();
        assert!(err.to_string().contains("[N005]"), "{text}: {err}");
    }
}
