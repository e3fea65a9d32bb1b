#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Type descriptor model for typeshape.
//!
//! Host types are described once into a [`TypeGraph`] and referred to by
//! [`DescriptorId`] afterwards. The schema engine in `typeshape-lib` only
//! ever reads descriptors; it never inspects host types itself.
//!
//! - [`PrimitiveKind`]: every scalar a descriptor can bottom out in
//! - [`Descriptor`] / [`Shape`] / [`Field`]: the structural model
//! - [`Describe`]: introspection for Rust types, with std implementations

mod describe;
mod descriptor;
mod graph;
mod invariants;
mod kind;
pub mod utils;

#[cfg(test)]
mod descriptor_tests;

pub use describe::Describe;
pub use descriptor::{Descriptor, DescriptorId, Field, FieldTag, ParseTagError, Shape};
pub use graph::{TIMESTAMP_NAME, TypeGraph};
pub use kind::{ParseKindError, PrimitiveKind};
