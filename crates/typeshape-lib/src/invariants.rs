//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use typeshape_core::DescriptorId;

use crate::Registry;
use crate::ts::Declaration;

impl Registry {
    /// References are only ever built for registered descriptors.
    pub(crate) fn ensure_declared(&self, id: DescriptorId) -> &Declaration {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "Registry: reference to descriptor {} has no declaration \
                 (references must be created through the registry)",
                id.as_u32()
            )
        })
    }
}
