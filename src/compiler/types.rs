use crate::ast::types::Type;

/// Emitted in place of a type the C backend has no spelling for.
pub const UNKNOWN_TYPE_MARKER: &str = "/* UNK type */";

/// Converts a semantic type into its C spelling.
///
/// `Bool` lowers to `int` since the output does not include `stdbool.h`.
pub fn map_type(ty: Type) -> &'static str {
    match ty {
        Type::F32 => "float",
        Type::F64 => "double",
        Type::I32 => "int",
        Type::String => "char*",
        Type::Bool => "int",
        Type::Void => "void",
        Type::Any | Type::Unknown => UNKNOWN_TYPE_MARKER,
    }
}
