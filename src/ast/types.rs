//! Semantic type tags for the AST.
//!
//! The language only knows a closed set of primitive types. Two extra
//! markers exist for the lowering engine:
//!
//! - `Unknown` tags expressions the engine could not understand and type
//!   annotations it could not read. It never passes a type check.
//! - `Any` tags raw pass-through fragments and is accepted by every check.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    F32,
    F64,
    I32,
    String,
    Bool,
    Void,
    Any,
    Unknown,
}

impl Type {
    /// Reads a type annotation as spelled in source and in the JSON AST.
    pub fn from_name(name: &str) -> Option<Type> {
        match name {
            "F32" => Some(Type::F32),
            "F64" => Some(Type::F64),
            "I32" => Some(Type::I32),
            "String" => Some(Type::String),
            "Bool" => Some(Type::Bool),
            "Void" => Some(Type::Void),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Type::F32 => "F32",
            Type::F64 => "F64",
            Type::I32 => "I32",
            Type::String => "String",
            Type::Bool => "Bool",
            Type::Void => "Void",
            Type::Any => "Any",
            Type::Unknown => "UNK",
        }
    }

    /// Types are compared by identity, except that `Any` matches everything.
    /// `Unknown` matches nothing, itself included.
    pub fn is_compatible_with(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Unknown, _) | (_, Type::Unknown) => false,
            (Type::Any, _) | (_, Type::Any) => true,
            (left, right) => left == right,
        }
    }

    /// Picks the informative side of a compatible pair, so that `Any + I32`
    /// stays `I32`.
    pub fn unify(self, other: Type) -> Type {
        if self == Type::Any {
            other
        } else {
            self
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
