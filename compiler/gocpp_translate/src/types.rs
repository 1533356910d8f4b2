//! Type mapping: Go primitive type names to C++/Qt type names.
//!
//! The table is fixed at build time. Anything that is not a plain identifier
//! naming one of these primitives is a failure, never a silent default.

use gocpp_ir::{SourceText, TypeExpr};

use crate::{TranslateError, TranslateResult};

/// The Go primitive types the translator understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Int8,
    Int16,
    Int32,
    Int64,
    /// Machine-word signed integer (`int`).
    Int,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    /// Machine-word unsigned integer (`uint`).
    Uint,
    Bool,
    String,
    Rune,
}

impl PrimitiveType {
    /// Look up a Go type name. `byte` is an alias of `uint8`.
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name {
            "int8" => PrimitiveType::Int8,
            "int16" => PrimitiveType::Int16,
            "int32" => PrimitiveType::Int32,
            "int64" => PrimitiveType::Int64,
            "int" => PrimitiveType::Int,
            "uint8" | "byte" => PrimitiveType::Uint8,
            "uint16" => PrimitiveType::Uint16,
            "uint32" => PrimitiveType::Uint32,
            "uint64" => PrimitiveType::Uint64,
            "uint" => PrimitiveType::Uint,
            "bool" => PrimitiveType::Bool,
            "string" => PrimitiveType::String,
            "rune" => PrimitiveType::Rune,
            _ => return None,
        };
        Some(ty)
    }

    /// The C++ spelling. `int` is treated as 64-bit.
    pub const fn cpp_name(self) -> &'static str {
        match self {
            PrimitiveType::Int8 => "signed char",
            PrimitiveType::Int16 => "short int",
            PrimitiveType::Int32 => "long int",
            PrimitiveType::Int64 | PrimitiveType::Int => "long long int",
            PrimitiveType::Uint8 => "unsigned char",
            PrimitiveType::Uint16 => "unsigned short int",
            PrimitiveType::Uint32 => "unsigned long int",
            PrimitiveType::Uint64 | PrimitiveType::Uint => "unsigned long long int",
            PrimitiveType::Bool => "bool",
            PrimitiveType::String => "QString",
            PrimitiveType::Rune => "QChar",
        }
    }
}

/// Map a type reference to its C++ spelling.
pub fn map_type(ty: &TypeExpr, src: &SourceText<'_>) -> TranslateResult<&'static str> {
    match ty {
        TypeExpr::Named(ident) => PrimitiveType::from_name(&ident.name)
            .map(PrimitiveType::cpp_name)
            .ok_or_else(|| TranslateError::UnknownPrimitiveType {
                name: ident.name.clone(),
                span: ident.span,
            }),
        TypeExpr::Unsupported(span) => Err(TranslateError::UnsupportedTypeShape {
            text: src.text_of(ty).to_string(),
            span: *span,
        }),
    }
}

#[cfg(test)]
mod tests;
