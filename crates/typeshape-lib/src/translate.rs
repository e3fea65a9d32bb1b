//! Descriptor to type expression translation.
//!
//! The translator walks the descriptor graph and fills the registry as it
//! goes. Anything with a name of its own (records, true aliases) becomes a
//! declaration and is referred to by identity from then on. Everything else
//! is inlined as a structural expression, even when a top-level declaration
//! was registered for it under an explicit name.

use std::collections::HashSet;
use std::mem;

use tracing::{debug, trace};
use typeshape_core::utils::capitalize;
use typeshape_core::{Descriptor, DescriptorId, Shape, TypeGraph};

use crate::classify::{classify, index_key};
use crate::error::{Error, Location, Result};
use crate::registry::Registry;
use crate::ts::{Alias, Declaration, IndexKey, Interface, TypeExpr};

pub(crate) struct Translator<'a> {
    pub(crate) graph: &'a TypeGraph,
    pub(crate) registry: &'a mut Registry,
    /// Aliases whose expression is being computed. Re-entering one yields a
    /// reference, which resolves once the alias is registered.
    pending_aliases: HashSet<DescriptorId>,
    pub(crate) location: Location,
}

impl<'a> Translator<'a> {
    pub(crate) fn new(graph: &'a TypeGraph, registry: &'a mut Registry) -> Self {
        Self {
            graph,
            registry,
            pending_aliases: HashSet::new(),
            location: Location::default(),
        }
    }

    /// Register `id` as a top-level declaration.
    ///
    /// Pointers are stripped first, so `T` and `Option<T>` land on the same
    /// declaration. Records become interfaces named by `name`, then their own
    /// name, then a synthetic one. Anything else becomes an alias and needs
    /// either `name` or a name of its own.
    pub(crate) fn declare(
        &mut self,
        id: DescriptorId,
        namespace: Option<&str>,
        name: Option<&str>,
    ) -> Result<DescriptorId> {
        let (id, _) = self.graph.strip_pointers(id);
        if self.registry.contains(id) {
            return Ok(id);
        }

        let graph = self.graph;
        let descriptor = graph.get(id);
        if descriptor.shape.is_record() {
            self.declare_interface(id, namespace, name, false)?;
            return Ok(id);
        }

        let alias_name = match name {
            Some(name) => name.to_string(),
            None if descriptor.is_alias() => descriptor.name.clone(),
            None => {
                return Err(Error::MissingName {
                    shape: descriptor.display_name(),
                });
            }
        };

        self.location = Location::new(alias_name.as_str());
        self.declare_alias(id, alias_name, namespace, false)?;
        Ok(id)
    }

    /// Translate a descriptor reached from inside another type.
    ///
    /// `suppress` drops the `| null` that pointers and variable-length
    /// collections would otherwise add, here and in every declaration first
    /// created beneath this point.
    pub(crate) fn translate(
        &mut self,
        id: DescriptorId,
        namespace: Option<&str>,
        suppress: bool,
    ) -> Result<TypeExpr> {
        let graph = self.graph;
        let descriptor = graph.get(id);
        trace!(id = id.as_u32(), name = %descriptor.name, "translate");

        if let Shape::Pointer(inner) = descriptor.shape {
            let expr = self.translate(inner, namespace, suppress)?;
            return Ok(if suppress { expr } else { expr.nullable() });
        }

        // Bare primitives and anonymous shapes are shared identities. A
        // declaration keyed on one only names that top-level registration.
        let declarable = descriptor.shape.is_record() || descriptor.is_alias();
        if declarable && (self.registry.contains(id) || self.pending_aliases.contains(&id)) {
            return Ok(TypeExpr::Reference(id));
        }

        if descriptor.shape.is_record() {
            self.declare_interface(id, namespace, None, suppress)?;
            return Ok(TypeExpr::Reference(id));
        }

        if descriptor.is_alias() {
            self.declare_alias(id, descriptor.name.clone(), namespace, suppress)?;
            return Ok(TypeExpr::Reference(id));
        }

        self.structure(descriptor, namespace, suppress)
    }

    /// Structural expression for a non-record shape, ignoring its name.
    fn structure(
        &mut self,
        descriptor: &Descriptor,
        namespace: Option<&str>,
        suppress: bool,
    ) -> Result<TypeExpr> {
        match &descriptor.shape {
            Shape::Primitive(kind) => {
                classify(*kind)
                    .map(TypeExpr::Primitive)
                    .ok_or_else(|| Error::UnsupportedKind {
                        kind: *kind,
                        location: self.location.clone(),
                    })
            }
            Shape::Pointer(inner) => {
                let expr = self.translate(*inner, namespace, suppress)?;
                Ok(if suppress { expr } else { expr.nullable() })
            }
            Shape::Collection { element, len } => {
                let array = TypeExpr::array(self.translate(*element, namespace, suppress)?);
                Ok(if len.is_none() && !suppress {
                    array.nullable()
                } else {
                    array
                })
            }
            Shape::Mapping { key, value } => {
                let key = self.mapping_key(*key)?;
                let value = self.translate(*value, namespace, suppress)?;
                Ok(TypeExpr::mapping(key, value))
            }
            Shape::Dynamic => Ok(TypeExpr::ANY),
            Shape::Timestamp => Ok(TypeExpr::STRING),
            Shape::Record(_) => unreachable!("records are declared, never inlined"),
        }
    }

    /// Keys resolve through aliases to the bare primitive: a named alias is
    /// never a legal index signature key.
    fn mapping_key(&self, key: DescriptorId) -> Result<IndexKey> {
        let descriptor = self.graph.get(key);
        let kind = match descriptor.shape {
            Shape::Primitive(kind) => Some(kind),
            _ => None,
        };
        kind.and_then(index_key)
            .ok_or_else(|| Error::UnsupportedMapKey {
                key: descriptor.display_name(),
                location: self.location.clone(),
            })
    }

    fn declare_interface(
        &mut self,
        id: DescriptorId,
        namespace: Option<&str>,
        explicit: Option<&str>,
        suppress: bool,
    ) -> Result<()> {
        let graph = self.graph;
        let declared = &graph.get(id).name;
        let decl = self.registry.get_or_create(id, |names| {
            let name = match explicit {
                Some(name) => name.to_string(),
                None if declared.is_empty() => names.issue(),
                None => capitalize(declared),
            };
            Declaration::Interface(Interface {
                name,
                namespace: namespace.map(str::to_string),
                properties: Vec::new(),
            })
        });
        let name = decl.name().to_string();
        debug!(interface = %name, namespace, "declared interface");

        let outer = mem::replace(&mut self.location, Location::new(name.as_str()));
        let properties = self.extract_fields(id, &name, namespace, suppress);
        self.location = outer;
        let properties = properties?;

        if let Some(Declaration::Interface(interface)) = self.registry.get_mut(id) {
            interface.properties = properties;
        }
        self.registry.complete(id);
        Ok(())
    }

    fn declare_alias(
        &mut self,
        id: DescriptorId,
        name: String,
        namespace: Option<&str>,
        suppress: bool,
    ) -> Result<()> {
        let graph = self.graph;
        self.pending_aliases.insert(id);
        let ty = self.structure(graph.get(id), namespace, suppress);
        self.pending_aliases.remove(&id);
        let ty = ty?;

        debug!(alias = %name, namespace, "declared alias");
        self.registry.get_or_create(id, |_| {
            Declaration::Alias(Alias {
                name,
                namespace: namespace.map(str::to_string),
                ty,
            })
        });
        Ok(())
    }
}
