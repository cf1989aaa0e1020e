//! Canonical type catalog
//!
//! One table drives both views of a kind: the GraphQL SDL view used to build
//! reference schemas for the oracle, and the Lua view written into the header
//! of the generated test file. Keeping a single table means the two views
//! cannot drift apart.

use crate::error::{CoreError, CoreResult};
use serde_json::Value as JsonValue;

/// A concrete sample value carried by a catalog entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleValue {
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(&'static str),
    /// Enum member, rendered as a bare identifier in GraphQL documents
    Enum(&'static str),
}

impl SampleValue {
    /// Whether this value is an enum member
    pub fn is_enum(&self) -> bool {
        matches!(self, SampleValue::Enum(_))
    }

    /// JSON form, as sent in a variables mapping
    pub fn to_json(&self) -> JsonValue {
        match self {
            SampleValue::Boolean(b) => JsonValue::Bool(*b),
            SampleValue::Int(i) => JsonValue::from(*i),
            SampleValue::Float(f) => float_to_json(*f),
            SampleValue::String(s) | SampleValue::Enum(s) => JsonValue::String((*s).to_string()),
        }
    }
}

/// Integral floats are written without a fraction (`0`, not `0.0`).
fn float_to_json(f: f64) -> JsonValue {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 {
        JsonValue::from(f as i64)
    } else {
        serde_json::Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null)
    }
}

/// Catalog entry for one argument kind
#[derive(Debug, PartialEq)]
pub struct TypeDescriptor {
    /// Kind name used in suite and case names (e.g. `boolean_true`)
    pub kind: &'static str,

    /// GraphQL type name (e.g. `Boolean`, `MyEnum`)
    pub wire_type: &'static str,

    /// SDL declaring the type, for kinds that are not built-in scalars
    pub sdl_declaration: Option<&'static str>,

    /// Lua expression for the type in the generated header
    pub lua_type: &'static str,

    /// Lua statement declaring the type, for kinds that are not built-in scalars
    pub lua_declaration: Option<&'static str>,

    /// Sample argument / variable value
    pub value: SampleValue,

    /// Sample variable default
    pub default: SampleValue,
}

impl TypeDescriptor {
    /// Whether values of this kind render as bare identifiers
    pub fn is_enum(&self) -> bool {
        self.value.is_enum()
    }
}

const MY_ENUM_SDL: &str = "enum MyEnum {
  a
  b
}
";

const MY_ENUM_LUA: &str = "local my_enum = types.enum({
    name = 'MyEnum',
    values = {
        a = { value = 'a' },
        b = { value = 'b' },
    },
})";

/// Every kind the generator knows about, in generation order
pub static CATALOG: &[TypeDescriptor] = &[
    TypeDescriptor {
        kind: "boolean_true",
        wire_type: "Boolean",
        sdl_declaration: None,
        lua_type: "types.boolean",
        lua_declaration: None,
        value: SampleValue::Boolean(true),
        default: SampleValue::Boolean(false),
    },
    TypeDescriptor {
        kind: "boolean_false",
        wire_type: "Boolean",
        sdl_declaration: None,
        lua_type: "types.boolean",
        lua_declaration: None,
        value: SampleValue::Boolean(false),
        default: SampleValue::Boolean(true),
    },
    TypeDescriptor {
        kind: "string",
        wire_type: "String",
        sdl_declaration: None,
        lua_type: "types.string",
        lua_declaration: None,
        value: SampleValue::String("Test string"),
        default: SampleValue::String("Default Test string"),
    },
    TypeDescriptor {
        kind: "float",
        wire_type: "Float",
        sdl_declaration: None,
        lua_type: "types.float",
        lua_declaration: None,
        value: SampleValue::Float(1.1111111),
        default: SampleValue::Float(0.0),
    },
    TypeDescriptor {
        kind: "int",
        wire_type: "Int",
        sdl_declaration: None,
        lua_type: "types.int",
        lua_declaration: None,
        value: SampleValue::Int(1 << 30),
        default: SampleValue::Int(0),
    },
    TypeDescriptor {
        kind: "id",
        wire_type: "ID",
        sdl_declaration: None,
        lua_type: "types.id",
        lua_declaration: None,
        value: SampleValue::String("00000000-0000-0000-0000-000000000000"),
        default: SampleValue::String("11111111-1111-1111-1111-111111111111"),
    },
    TypeDescriptor {
        kind: "enum",
        wire_type: "MyEnum",
        sdl_declaration: Some(MY_ENUM_SDL),
        lua_type: "my_enum",
        lua_declaration: Some(MY_ENUM_LUA),
        value: SampleValue::Enum("b"),
        default: SampleValue::Enum("a"),
    },
];

/// Look up a catalog entry by kind name
pub fn lookup(kind: &str) -> CoreResult<&'static TypeDescriptor> {
    CATALOG
        .iter()
        .find(|d| d.kind == kind)
        .ok_or_else(|| CoreError::UnknownKind {
            kind: kind.to_string(),
            known: kind_names().join(", "),
        })
}

/// All kind names in catalog order
pub fn kind_names() -> Vec<&'static str> {
    CATALOG.iter().map(|d| d.kind).collect()
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
