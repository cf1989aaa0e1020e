//! Parameter combinations

use crate::catalog::TypeDescriptor;
use crate::literal::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nullability of a type position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nullability {
    Nullable,
    NonNullable,
}

impl Nullability {
    /// Both nullabilities, nullable first
    pub const ALL: [Nullability; 2] = [Nullability::Nullable, Nullability::NonNullable];

    /// GraphQL suffix for this nullability
    pub fn suffix(self) -> &'static str {
        match self {
            Nullability::Nullable => "",
            Nullability::NonNullable => "!",
        }
    }
}

impl fmt::Display for Nullability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nullability::Nullable => write!(f, "Nullable"),
            Nullability::NonNullable => write!(f, "NonNullable"),
        }
    }
}

/// Type of an argument or a variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeSpec {
    /// A catalog kind, optionally non-null
    Named {
        kind: &'static TypeDescriptor,
        nullability: Nullability,
    },
    /// A list of a catalog kind; both the list and its items carry a nullability
    List {
        nullability: Nullability,
        inner: &'static TypeDescriptor,
        inner_nullability: Nullability,
    },
}

impl TypeSpec {
    pub fn named(kind: &'static TypeDescriptor, nullability: Nullability) -> Self {
        TypeSpec::Named { kind, nullability }
    }

    pub fn list(
        nullability: Nullability,
        inner: &'static TypeDescriptor,
        inner_nullability: Nullability,
    ) -> Self {
        TypeSpec::List {
            nullability,
            inner,
            inner_nullability,
        }
    }

    /// Kind name as written into generated tests: `list` for lists
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeSpec::Named { kind, .. } => kind.kind,
            TypeSpec::List { .. } => "list",
        }
    }

    /// Outer nullability
    pub fn nullability(&self) -> Nullability {
        match self {
            TypeSpec::Named { nullability, .. } | TypeSpec::List { nullability, .. } => {
                *nullability
            }
        }
    }

    /// Item kind for lists
    pub fn inner_kind(&self) -> Option<&'static TypeDescriptor> {
        match self {
            TypeSpec::Named { .. } => None,
            TypeSpec::List { inner, .. } => Some(inner),
        }
    }

    /// Item nullability for lists
    pub fn inner_nullability(&self) -> Option<Nullability> {
        match self {
            TypeSpec::Named { .. } => None,
            TypeSpec::List {
                inner_nullability, ..
            } => Some(*inner_nullability),
        }
    }

    /// The catalog entry whose values fill this type
    pub fn element_kind(&self) -> &'static TypeDescriptor {
        match self {
            TypeSpec::Named { kind, .. } => kind,
            TypeSpec::List { inner, .. } => inner,
        }
    }
}

/// A variable declared by the query and passed as the argument
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSpec {
    pub ty: TypeSpec,
    /// Runtime value sent in the variables mapping
    pub value: Literal,
    /// Default declared in the query
    pub default: Literal,
}

/// One point of a suite's Cartesian product
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    pub argument: TypeSpec,
    /// Inlined argument value; unused when a variable is set
    pub argument_value: Literal,
    pub variable: Option<VariableSpec>,
}

impl Combination {
    /// Combination passing `value` inline
    pub fn inline(argument: TypeSpec, value: Literal) -> Self {
        Self {
            argument,
            argument_value: value,
            variable: None,
        }
    }

    /// Combination passing the argument through `$var1`
    pub fn with_variable(argument: TypeSpec, variable: VariableSpec) -> Self {
        Self {
            argument,
            argument_value: Literal::Absent,
            variable: Some(variable),
        }
    }
}
