//! Target-language model: declarations and the type expressions inside them.

mod decl;
mod expr;


pub use decl::{Alias, Declaration, Interface, Property};
pub use expr::{ExprDisplay, IndexKey, Literal, LiteralKind, Primitive, TypeExpr};
