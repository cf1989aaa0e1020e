//! Value-to-Lua conversion
//!
//! Mirrors the GraphQL literal rules of `nf_core::builder` but targets Lua:
//! `Absent` is `nil`, `Null` is `box.NULL`, lists are table constructors.

use nf_core::{Literal, Nullability, SampleValue};

/// Lua `nil`
pub const NIL: &str = "nil";

/// Tarantool's explicit null
pub const BOX_NULL: &str = "box.NULL";

/// Single-quoted Lua string literal
pub fn lua_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Long bracket string (`[[...]]`), with enough `=` to never close early
pub fn lua_long_string(s: &str) -> String {
    let level = (0..)
        .find(|n| {
            let close = format!("]{}]", "=".repeat(*n));
            !s.contains(&close)
        })
        .unwrap_or(0);
    let eq = "=".repeat(level);
    format!("[{eq}[{s}]{eq}]")
}

/// Lua literal for a sample value
pub fn lua_sample(value: &SampleValue) -> String {
    match value {
        SampleValue::Boolean(b) => b.to_string(),
        SampleValue::Int(i) => i.to_string(),
        SampleValue::Float(f) => f.to_string(),
        SampleValue::String(s) | SampleValue::Enum(s) => lua_string(s),
    }
}

/// Lua expression for a literal
pub fn lua_literal(literal: &Literal) -> String {
    match literal {
        Literal::Absent => NIL.to_string(),
        Literal::Null => BOX_NULL.to_string(),
        Literal::Value(value) => lua_sample(value),
        // `{nil}` and `{}` are the same table in Lua
        Literal::List(items) => {
            let rendered: Vec<String> = items
                .iter()
                .filter(|item| !item.is_absent())
                .map(lua_literal)
                .collect();
            format!("{{{}}}", rendered.join(", "))
        }
    }
}

/// Header constant name for a nullability, or `nil`
pub fn lua_nullability(nullability: Option<Nullability>) -> String {
    nullability
        .map(|n| n.to_string())
        .unwrap_or_else(|| NIL.to_string())
}

/// Quoted kind name, or `nil`
pub fn lua_kind(kind: Option<&str>) -> String {
    kind.map(lua_string).unwrap_or_else(|| NIL.to_string())
}

#[cfg(test)]
#[path = "lua_test.rs"]
mod tests;
