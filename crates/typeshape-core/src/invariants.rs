//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Descriptor, DescriptorId, TypeGraph};

impl TypeGraph {
    pub(crate) fn ensure_defined(&self, id: DescriptorId) -> &Descriptor {
        match self.descriptors_slot(id) {
            Some(Some(descriptor)) => descriptor,
            Some(None) => panic!(
                "TypeGraph: descriptor {} was reserved but never defined \
                 (describe_with must finish before the descriptor is read)",
                id.as_u32()
            ),
            None => panic!(
                "TypeGraph: descriptor {} not found (ids are only valid in the graph that issued them)",
                id.as_u32()
            ),
        }
    }

    pub(crate) fn ensure_reserved(&mut self, id: DescriptorId) -> &mut Option<Descriptor> {
        let slot = self
            .descriptors_slot_mut(id)
            .unwrap_or_else(|| panic!("TypeGraph: descriptor {} not found", id.as_u32()));
        assert!(
            slot.is_none(),
            "TypeGraph: descriptor {} is already defined",
            id.as_u32()
        );
        slot
    }
}
