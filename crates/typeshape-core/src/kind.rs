//! Primitive descriptor kinds.
//!
//! Every scalar a host type can bottom out in, including the ones that have no
//! data-interchange representation. The engine decides what to do with each;
//! this module only names them.

use std::fmt;
use std::str::FromStr;

/// Primitive kinds a descriptor can carry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PrimitiveKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    String,
    /// Complex number with 32-bit components.
    Complex64,
    /// Complex number with 64-bit components.
    Complex128,
    /// Message channel endpoint.
    Channel,
    /// Function or closure.
    Function,
    /// Raw memory address.
    RawPointer,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 22] = [
        Self::Bool,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::I128,
        Self::Isize,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::U128,
        Self::Usize,
        Self::F32,
        Self::F64,
        Self::Char,
        Self::String,
        Self::Complex64,
        Self::Complex128,
        Self::Channel,
        Self::Function,
        Self::RawPointer,
    ];

    /// The kind's own name. A descriptor named exactly this is the bare primitive.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::String => "string",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::Channel => "channel",
            Self::Function => "function",
            Self::RawPointer => "rawptr",
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::I128
                | Self::Isize
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::U128
                | Self::Usize
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Text-like kinds (`char` serializes as a one-character string).
    pub fn is_textual(self) -> bool {
        matches!(self, Self::Char | Self::String)
    }

    /// Whether values of this kind survive a round trip through a data-interchange format.
    pub fn is_serializable(self) -> bool {
        !matches!(
            self,
            Self::Complex64 | Self::Complex128 | Self::Channel | Self::Function | Self::RawPointer
        )
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no primitive kind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown primitive kind `{0}`")]
pub struct ParseKindError(pub String);

impl FromStr for PrimitiveKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}
