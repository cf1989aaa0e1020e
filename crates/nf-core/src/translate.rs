//! Oracle error message translation
//!
//! The reference engine and the Lua GraphQL library word the same failures
//! differently. Each engine message is first recognized as one of a closed set
//! of [`ErrorShape`]s by an ordered rule list (first match wins), then the shape
//! renders the Lua library's wording. Messages no rule recognizes pass through
//! unchanged so that new failure kinds show up as mismatches in generated tests.

use crate::type_ref::TypeRef;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// A recognized engine failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorShape {
    /// A null reached a non-null position during execution
    ValueNotNull { ty: TypeRef },

    /// A non-null variable was declared without default and not provided
    VariableNotProvided { variable: String, ty: TypeRef },

    /// A non-null variable was provided as null
    VariableNull { variable: String, ty: TypeRef },

    /// A variable's declared type does not fit the argument it is passed to
    VariableTypeMismatch {
        variable: String,
        variable_ty: TypeRef,
        expected_ty: TypeRef,
    },

    /// A null item inside a list variable whose items are non-null
    VariableItemNull {
        variable: String,
        /// Zero-based position reported by the engine
        index: usize,
        item_ty: TypeRef,
    },

    /// A non-null argument was written as null
    ArgumentNull { argument: String, ty: TypeRef },
}

type Recognizer = fn(&Captures<'_>) -> Option<ErrorShape>;

/// Recognition rules, most specific first
const RULES: &[(&str, Recognizer)] = &[
    (
        r#"^Expected value of type "(?P<ty>[^"]+)", found null\.$"#,
        value_not_null,
    ),
    (
        r#"^Variable "\$(?P<var>\w+)" of required type "(?P<ty>[^"]+)" was not provided\.$"#,
        variable_not_provided,
    ),
    (
        r#"^Variable "\$(?P<var>\w+)" of non-null type "(?P<ty>[^"]+)" must not be null\.$"#,
        variable_null,
    ),
    (
        r#"^Variable "\$(?P<var>\w+)" of type "(?P<from>[^"]+)" used in position expecting type "(?P<to>[^"]+)"\.$"#,
        variable_type_mismatch,
    ),
    (
        r#"^Variable "\$(?P<var>\w+)" got invalid value null at "(?P<path>\w+)\[(?P<index>\d+)\]"; Expected non-nullable type "(?P<ty>[^"]+)" not to be null\.$"#,
        variable_item_null,
    ),
    (
        r#"^Argument "(?P<arg>\w+)" of non-null type "(?P<ty>[^"]+)" must not be null\.$"#,
        argument_null,
    ),
];

static COMPILED_RULES: OnceLock<Vec<(Regex, Recognizer)>> = OnceLock::new();

fn compiled_rules() -> &'static [(Regex, Recognizer)] {
    COMPILED_RULES.get_or_init(|| {
        RULES
            .iter()
            .map(|(pattern, recognize)| (Regex::new(pattern).expect("valid regex"), *recognize))
            .collect()
    })
}

fn type_at(captures: &Captures<'_>, group: &str) -> Option<TypeRef> {
    captures.name(group)?.as_str().parse().ok()
}

fn text_at(captures: &Captures<'_>, group: &str) -> Option<String> {
    captures.name(group).map(|m| m.as_str().to_string())
}

fn non_null_at(captures: &Captures<'_>, group: &str) -> Option<TypeRef> {
    type_at(captures, group).filter(TypeRef::contains_non_null)
}

fn value_not_null(captures: &Captures<'_>) -> Option<ErrorShape> {
    Some(ErrorShape::ValueNotNull {
        ty: non_null_at(captures, "ty")?,
    })
}

fn variable_not_provided(captures: &Captures<'_>) -> Option<ErrorShape> {
    Some(ErrorShape::VariableNotProvided {
        variable: text_at(captures, "var")?,
        ty: non_null_at(captures, "ty")?,
    })
}

fn variable_null(captures: &Captures<'_>) -> Option<ErrorShape> {
    Some(ErrorShape::VariableNull {
        variable: text_at(captures, "var")?,
        ty: non_null_at(captures, "ty")?,
    })
}

fn variable_type_mismatch(captures: &Captures<'_>) -> Option<ErrorShape> {
    Some(ErrorShape::VariableTypeMismatch {
        variable: text_at(captures, "var")?,
        variable_ty: type_at(captures, "from")?,
        expected_ty: type_at(captures, "to")?,
    })
}

fn variable_item_null(captures: &Captures<'_>) -> Option<ErrorShape> {
    let variable = text_at(captures, "var")?;
    if captures.name("path")?.as_str() != variable {
        return None;
    }
    Some(ErrorShape::VariableItemNull {
        variable,
        index: captures.name("index")?.as_str().parse().ok()?,
        item_ty: non_null_at(captures, "ty")?,
    })
}

fn argument_null(captures: &Captures<'_>) -> Option<ErrorShape> {
    Some(ErrorShape::ArgumentNull {
        argument: text_at(captures, "arg")?,
        ty: non_null_at(captures, "ty")?,
    })
}

impl ErrorShape {
    /// Recognize an engine message; `None` when no rule matches
    pub fn parse(message: &str) -> Option<Self> {
        compiled_rules()
            .iter()
            .find_map(|(regex, recognize)| regex.captures(message).and_then(|c| recognize(&c)))
    }

    /// Short name of the shape
    pub fn name(&self) -> &'static str {
        match self {
            ErrorShape::ValueNotNull { .. } => "value_not_null",
            ErrorShape::VariableNotProvided { .. } => "variable_not_provided",
            ErrorShape::VariableNull { .. } => "variable_null",
            ErrorShape::VariableTypeMismatch { .. } => "variable_type_mismatch",
            ErrorShape::VariableItemNull { .. } => "variable_item_null",
            ErrorShape::ArgumentNull { .. } => "argument_null",
        }
    }

    /// The Lua library's wording for this failure
    pub fn render(&self) -> String {
        match self {
            ErrorShape::ValueNotNull { ty } | ErrorShape::ArgumentNull { ty, .. } => {
                format!(r#"Expected non-null for "{}", got null"#, ty.lua_notation())
            }
            ErrorShape::VariableNotProvided { variable, .. }
            | ErrorShape::VariableNull { variable, .. } => {
                format!(r#"Variable "{variable}" expected to be non-null"#)
            }
            ErrorShape::VariableTypeMismatch {
                variable,
                variable_ty,
                expected_ty,
            } => format!(
                r#"Variable "{variable}" type mismatch: the variable type "{}" is not compatible with the argument type "{}""#,
                variable_ty.lua_notation(),
                expected_ty.lua_notation()
            ),
            // Lua lists are 1-based
            ErrorShape::VariableItemNull {
                variable, index, ..
            } => format!(r#"Variable "{variable}[{}]" expected to be non-null"#, index + 1),
        }
    }
}

/// Translate an engine error message into the Lua library's wording
pub fn translate(message: &str) -> String {
    match ErrorShape::parse(message) {
        Some(shape) => {
            log::debug!("Translated {} error: {}", shape.name(), message);
            shape.render()
        }
        None => message.to_string(),
    }
}

#[cfg(test)]
#[path = "translate_test.rs"]
mod tests;
