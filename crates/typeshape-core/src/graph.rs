//! Descriptor arena.
//!
//! `TypeGraph` owns every descriptor and hands out [`DescriptorId`]s. Host
//! types are resolved through [`Describe`] and cached by `TypeId`, so every
//! path that reaches the same Rust type lands on the same identity.

use std::any::TypeId;
use std::collections::HashMap;

use crate::{Describe, Descriptor, DescriptorId, Field, PrimitiveKind, Shape};

/// Name given to the timestamp built-in.
pub const TIMESTAMP_NAME: &str = "timestamp";

#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    /// `None` marks a reserved slot whose shape is not known yet.
    descriptors: Vec<Option<Descriptor>>,
    primitives: HashMap<PrimitiveKind, DescriptorId>,
    host_types: HashMap<TypeId, DescriptorId>,
    dynamic: Option<DescriptorId>,
    timestamp: Option<DescriptorId>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Add a descriptor under a fresh identity.
    pub fn insert(&mut self, descriptor: Descriptor) -> DescriptorId {
        let id = self.next_id();
        self.descriptors.push(Some(descriptor));
        id
    }

    /// Allocate an identity whose descriptor is supplied later by [`define`](Self::define).
    pub fn reserve(&mut self) -> DescriptorId {
        let id = self.next_id();
        self.descriptors.push(None);
        id
    }

    /// Fill a reserved slot. Defining a slot twice is a bug in the caller.
    pub fn define(&mut self, id: DescriptorId, descriptor: Descriptor) {
        let slot = self.ensure_reserved(id);
        *slot = Some(descriptor);
    }

    pub fn is_defined(&self, id: DescriptorId) -> bool {
        matches!(self.descriptors_slot(id), Some(Some(_)))
    }

    pub fn try_get(&self, id: DescriptorId) -> Option<&Descriptor> {
        self.descriptors_slot(id)?.as_ref()
    }

    /// Panics if `id` is unknown or still reserved.
    pub fn get(&self, id: DescriptorId) -> &Descriptor {
        self.ensure_defined(id)
    }

    pub fn shape(&self, id: DescriptorId) -> &Shape {
        &self.get(id).shape
    }

    pub fn iter(&self) -> impl Iterator<Item = (DescriptorId, &Descriptor)> {
        self.descriptors
            .iter()
            .enumerate()
            .filter_map(|(i, d)| Some((DescriptorId(i as u32), d.as_ref()?)))
    }

    /// The shared descriptor for a primitive kind, named after the kind itself.
    pub fn primitive(&mut self, kind: PrimitiveKind) -> DescriptorId {
        if let Some(&id) = self.primitives.get(&kind) {
            return id;
        }
        let id = self.insert(Descriptor::new(kind.name(), Shape::Primitive(kind)));
        self.primitives.insert(kind, id);
        id
    }

    pub fn pointer(&mut self, to: DescriptorId) -> DescriptorId {
        self.insert(Descriptor::anonymous(Shape::Pointer(to)))
    }

    pub fn collection(&mut self, element: DescriptorId) -> DescriptorId {
        self.insert(Descriptor::anonymous(Shape::Collection { element, len: None }))
    }

    pub fn fixed_collection(&mut self, element: DescriptorId, len: usize) -> DescriptorId {
        self.insert(Descriptor::anonymous(Shape::Collection {
            element,
            len: Some(len),
        }))
    }

    pub fn mapping(&mut self, key: DescriptorId, value: DescriptorId) -> DescriptorId {
        self.insert(Descriptor::anonymous(Shape::Mapping { key, value }))
    }

    pub fn dynamic(&mut self) -> DescriptorId {
        if let Some(id) = self.dynamic {
            return id;
        }
        let id = self.insert(Descriptor::anonymous(Shape::Dynamic));
        self.dynamic = Some(id);
        id
    }

    pub fn timestamp(&mut self) -> DescriptorId {
        if let Some(id) = self.timestamp {
            return id;
        }
        let id = self.insert(Descriptor::new(TIMESTAMP_NAME, Shape::Timestamp));
        self.timestamp = Some(id);
        id
    }

    /// A record; pass an empty name for an anonymous inline record.
    pub fn record(&mut self, name: impl Into<String>, fields: Vec<Field>) -> DescriptorId {
        self.insert(Descriptor::new(name, Shape::Record(fields)))
    }

    /// A named type over an arbitrary shape, e.g. `Offset` over `i64`.
    pub fn named(&mut self, name: impl Into<String>, shape: Shape) -> DescriptorId {
        self.insert(Descriptor::new(name, shape))
    }

    /// Resolve a host type to its descriptor, building it on first use.
    pub fn describe<T: Describe + ?Sized>(&mut self) -> DescriptorId {
        let key = TypeId::of::<T>();
        if let Some(&id) = self.host_types.get(&key) {
            return id;
        }
        let id = T::describe(self);
        self.host_types.insert(key, id);
        id
    }

    /// Build the descriptor for `T` with its identity already cached, so
    /// `build` may describe types that refer back to `T`.
    pub fn describe_with<T, F>(&mut self, build: F) -> DescriptorId
    where
        T: ?Sized + 'static,
        F: FnOnce(&mut TypeGraph, DescriptorId) -> Descriptor,
    {
        let key = TypeId::of::<T>();
        if let Some(&id) = self.host_types.get(&key) {
            return id;
        }
        let id = self.reserve();
        self.host_types.insert(key, id);
        let descriptor = build(self, id);
        self.define(id, descriptor);
        id
    }

    /// Describe `T` as a named record. Fields are built after the identity exists.
    pub fn describe_record<T, F>(&mut self, name: &str, fields: F) -> DescriptorId
    where
        T: ?Sized + 'static,
        F: FnOnce(&mut TypeGraph) -> Vec<Field>,
    {
        self.describe_with::<T, _>(|graph, _| Descriptor::new(name, Shape::Record(fields(graph))))
    }

    /// Describe `T` as a named type over the given shape.
    pub fn describe_named<T, F>(&mut self, name: &str, shape: F) -> DescriptorId
    where
        T: ?Sized + 'static,
        F: FnOnce(&mut TypeGraph) -> Shape,
    {
        self.describe_with::<T, _>(|graph, _| Descriptor::new(name, shape(graph)))
    }

    /// Follow pointer indirections to the first non-pointer descriptor.
    /// Returns it together with the number of pointers crossed.
    pub fn strip_pointers(&self, mut id: DescriptorId) -> (DescriptorId, usize) {
        let mut depth = 0;
        while let Shape::Pointer(inner) = self.shape(id) {
            id = *inner;
            depth += 1;
        }
        (id, depth)
    }

    pub(crate) fn descriptors_slot(&self, id: DescriptorId) -> Option<&Option<Descriptor>> {
        self.descriptors.get(id.index())
    }

    pub(crate) fn descriptors_slot_mut(
        &mut self,
        id: DescriptorId,
    ) -> Option<&mut Option<Descriptor>> {
        self.descriptors.get_mut(id.index())
    }

    fn next_id(&self) -> DescriptorId {
        let index = u32::try_from(self.descriptors.len())
            .unwrap_or_else(|_| panic!("TypeGraph: descriptor count exceeds u32::MAX"));
        DescriptorId(index)
    }
}
