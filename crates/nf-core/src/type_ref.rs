//! GraphQL type references as they appear inside engine error messages

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;

/// Parsed GraphQL type reference (`Int`, `[Int!]!`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Whether a non-null wrapper appears anywhere in the reference
    pub fn contains_non_null(&self) -> bool {
        match self {
            TypeRef::Named(_) => false,
            TypeRef::List(inner) => inner.contains_non_null(),
            TypeRef::NonNull(_) => true,
        }
    }

    /// Wrapper notation used by the Lua GraphQL library: `NonNull(List(Int))`
    pub fn lua_notation(&self) -> String {
        match self {
            TypeRef::Named(name) => name.clone(),
            TypeRef::List(inner) => format!("List({})", inner.lua_notation()),
            TypeRef::NonNull(inner) => format!("NonNull({})", inner.lua_notation()),
        }
    }

    fn parse_prefix(text: &str) -> Result<(TypeRef, &str), String> {
        let (base, rest) = if let Some(after_bracket) = text.strip_prefix('[') {
            let (inner, rest) = Self::parse_prefix(after_bracket)?;
            let rest = rest
                .strip_prefix(']')
                .ok_or_else(|| "missing closing ']'".to_string())?;
            (TypeRef::List(Box::new(inner)), rest)
        } else {
            let end = text
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(text.len());
            let name = &text[..end];
            if name.is_empty() {
                return Err("expected a type name".to_string());
            }
            if name.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(format!("type name '{name}' starts with a digit"));
            }
            (TypeRef::Named(name.to_string()), &text[end..])
        };

        match rest.strip_prefix('!') {
            Some(rest) => Ok((TypeRef::NonNull(Box::new(base)), rest)),
            None => Ok((base, rest)),
        }
    }
}

impl FromStr for TypeRef {
    type Err = CoreError;

    fn from_str(text: &str) -> CoreResult<Self> {
        let invalid = |reason: String| CoreError::InvalidTypeRef {
            text: text.to_string(),
            reason,
        };
        let (ty, rest) = Self::parse_prefix(text).map_err(invalid)?;
        if !rest.is_empty() {
            return Err(invalid(format!("unexpected trailing '{rest}'")));
        }
        Ok(ty)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{name}"),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

#[cfg(test)]
#[path = "type_ref_test.rs"]
mod tests;
