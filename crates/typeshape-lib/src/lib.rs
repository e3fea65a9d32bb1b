#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Schema engine: turns type descriptors into TypeScript declarations.
//!
//! - `translate` / `fields` - descriptor walk, nullability, flattening
//! - `registry` - one declaration per descriptor identity, in order
//! - `union` - literal unions and alias retrofits
//! - `render` - schema text
//! - `manifest` - JSON descriptor provider for non-Rust hosts
//!
//! [`Generator`] is the entry point.

pub mod classify;
mod config;
mod error;
mod fields;
mod generator;
mod invariants;
pub mod manifest;
pub mod naming;
mod registry;
mod render;
mod translate;
pub mod ts;
mod union;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod fields_tests;
#[cfg(test)]
mod naming_tests;

pub use config::{Config, DEFAULT_HEADER};
pub use error::{Error, Location, Result};
pub use generator::Generator;
pub use registry::Registry;
