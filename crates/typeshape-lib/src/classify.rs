//! Primitive kind classification.

use typeshape_core::PrimitiveKind;

use crate::ts::{IndexKey, Primitive};

/// Target primitive for `kind`, or `None` when the kind has no representation.
pub fn classify(kind: PrimitiveKind) -> Option<Primitive> {
    if kind.is_numeric() {
        return Some(Primitive::Number);
    }
    match kind {
        PrimitiveKind::Bool => Some(Primitive::Boolean),
        PrimitiveKind::Char | PrimitiveKind::String => Some(Primitive::String),
        _ => None,
    }
}

/// Index signature key for `kind`, if it may key a mapping.
pub fn index_key(kind: PrimitiveKind) -> Option<IndexKey> {
    match classify(kind)? {
        Primitive::String => Some(IndexKey::String),
        Primitive::Number => Some(IndexKey::Number),
        _ => None,
    }
}
