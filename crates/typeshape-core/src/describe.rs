//! Host-type introspection.
//!
//! A type implements [`Describe`] by building its descriptor in a
//! [`TypeGraph`]. Implementations are provided for the standard library types
//! with a data-interchange meaning, and for the ones that deliberately have
//! none (raw pointers, functions, channels) so the engine can reject them.
//!
//! User types describe themselves through the graph's helpers:
//!
//! ```
//! use typeshape_core::{Describe, DescriptorId, Field, TypeGraph};
//!
//! struct Position {
//!     x: i64,
//!     y: i64,
//! }
//!
//! impl Describe for Position {
//!     fn describe(graph: &mut TypeGraph) -> DescriptorId {
//!         graph.describe_record::<Self, _>("Position", |g| {
//!             vec![
//!                 Field::new("X", g.describe::<i64>()),
//!                 Field::new("Y", g.describe::<i64>()),
//!             ]
//!         })
//!     }
//! }
//!
//! let mut graph = TypeGraph::new();
//! let id = graph.describe::<Position>();
//! assert_eq!(graph.describe::<Position>(), id);
//! assert_eq!(graph.get(id).name, "Position");
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::time::SystemTime;

use crate::{DescriptorId, PrimitiveKind, TypeGraph};

/// A host type with a descriptor.
///
/// Call [`TypeGraph::describe`] rather than `describe` directly: the graph
/// caches the result so repeated lookups share one identity.
pub trait Describe: 'static {
    fn describe(graph: &mut TypeGraph) -> DescriptorId;
}

macro_rules! describe_primitive {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe(graph: &mut TypeGraph) -> DescriptorId {
                    graph.primitive(PrimitiveKind::$kind)
                }
            }
        )*
    };
}

describe_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    char => Char,
    String => String,
    str => String,
}

impl<T: Describe> Describe for Option<T> {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        let inner = graph.describe::<T>();
        graph.pointer(inner)
    }
}

macro_rules! describe_transparent {
    ($($wrapper:ident),*) => {
        $(
            impl<T: Describe + ?Sized> Describe for $wrapper<T> {
                fn describe(graph: &mut TypeGraph) -> DescriptorId {
                    graph.describe::<T>()
                }
            }
        )*
    };
}

describe_transparent!(Box, Rc, Arc, RefCell);

impl<T: Describe + ?Sized> Describe for &'static T {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.describe::<T>()
    }
}

macro_rules! describe_sequence {
    ($($seq:ident),*) => {
        $(
            impl<T: Describe> Describe for $seq<T> {
                fn describe(graph: &mut TypeGraph) -> DescriptorId {
                    let element = graph.describe::<T>();
                    graph.collection(element)
                }
            }
        )*
    };
}

describe_sequence!(Vec, VecDeque, BTreeSet);

impl<T: Describe, S: 'static> Describe for HashSet<T, S> {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        let element = graph.describe::<T>();
        graph.collection(element)
    }
}

impl<T: Describe> Describe for [T] {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        let element = graph.describe::<T>();
        graph.collection(element)
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        let element = graph.describe::<T>();
        graph.fixed_collection(element, N)
    }
}

impl<K: Describe, V: Describe, S: 'static> Describe for HashMap<K, V, S> {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        let key = graph.describe::<K>();
        let value = graph.describe::<V>();
        graph.mapping(key, value)
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        let key = graph.describe::<K>();
        let value = graph.describe::<V>();
        graph.mapping(key, value)
    }
}

impl Describe for serde_json::Value {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.dynamic()
    }
}

impl Describe for serde_json::Map<String, serde_json::Value> {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        let key = graph.primitive(PrimitiveKind::String);
        let value = graph.dynamic();
        graph.mapping(key, value)
    }
}

impl Describe for SystemTime {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.timestamp()
    }
}

// No interchange representation. Described so the engine can name them in errors.

impl<T: ?Sized + 'static> Describe for *const T {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.primitive(PrimitiveKind::RawPointer)
    }
}

impl<T: ?Sized + 'static> Describe for *mut T {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.primitive(PrimitiveKind::RawPointer)
    }
}

impl<R: 'static> Describe for fn() -> R {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.primitive(PrimitiveKind::Function)
    }
}

impl<A: 'static, R: 'static> Describe for fn(A) -> R {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.primitive(PrimitiveKind::Function)
    }
}

impl<T: 'static> Describe for Sender<T> {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.primitive(PrimitiveKind::Channel)
    }
}

impl<T: 'static> Describe for Receiver<T> {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.primitive(PrimitiveKind::Channel)
    }
}
