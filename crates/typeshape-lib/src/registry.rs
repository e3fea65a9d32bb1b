//! Declaration registry.
//!
//! Maps descriptor identity to its one declaration. Iteration order is
//! registry order, which is what the renderer emits.

use indexmap::IndexMap;
use typeshape_core::DescriptorId;

use crate::naming::AnonymousNames;
use crate::ts::{Alias, Declaration, Interface};

#[derive(Clone, Debug, Default)]
pub struct Registry {
    declarations: IndexMap<DescriptorId, Declaration>,
    names: AnonymousNames,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn contains(&self, id: DescriptorId) -> bool {
        self.declarations.contains_key(&id)
    }

    pub fn get(&self, id: DescriptorId) -> Option<&Declaration> {
        self.declarations.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: DescriptorId) -> Option<&mut Declaration> {
        self.declarations.get_mut(&id)
    }

    /// Existing declaration for `id`, or the one `factory` builds.
    ///
    /// This is the only way declarations come into existence. The factory
    /// receives the anonymous name source so that a number is only consumed
    /// when a declaration is actually created.
    pub(crate) fn get_or_create<F>(&mut self, id: DescriptorId, factory: F) -> &mut Declaration
    where
        F: FnOnce(&mut AnonymousNames) -> Declaration,
    {
        let Self {
            declarations,
            names,
        } = self;
        declarations.entry(id).or_insert_with(|| factory(names))
    }

    /// Move a finished declaration behind everything registered so far.
    ///
    /// Interfaces are created before their fields are translated so that
    /// self references resolve, but take their place once those fields are
    /// done. Nested types therefore precede the types that use them.
    pub(crate) fn complete(&mut self, id: DescriptorId) {
        if let Some(index) = self.declarations.get_index_of(&id) {
            let last = self.declarations.len() - 1;
            self.declarations.move_index(index, last);
        }
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &Interface> {
        self.declarations.values().filter_map(Declaration::as_interface)
    }

    pub fn aliases(&self) -> impl Iterator<Item = &Alias> {
        self.declarations.values().filter_map(Declaration::as_alias)
    }

    pub fn anonymous_issued(&self) -> u32 {
        self.names.issued()
    }

    /// Drop every declaration and restart anonymous numbering.
    pub fn clear(&mut self) {
        self.declarations.clear();
        self.names = AnonymousNames::new();
    }
}
