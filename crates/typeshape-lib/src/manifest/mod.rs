//! JSON manifests: a descriptor graph plus the registrations to run on it.
//!
//! Lets hosts without a Rust type system drive the generator. Declared types
//! are resolved in two passes (reserve every name, then define each one), so
//! records may refer to each other and to themselves in any order.

mod typeref;


use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;
use typeshape_core::{Descriptor, DescriptorId, Field, FieldTag, ParseTagError, Shape, TypeGraph};

use crate::{Config, Generator};

pub use typeref::{TypeRef, TypeRefError, parse as parse_type_ref};

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("invalid manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown type `{name}`")]
    UnknownType { name: String },

    #[error(transparent)]
    Syntax(#[from] TypeRefError),

    #[error("type `{name}` is defined only in terms of itself")]
    AliasCycle { name: String },

    #[error("field `{field}`: {source}")]
    Tag {
        field: String,
        #[source]
        source: ParseTagError,
    },

    #[error(transparent)]
    Generate(#[from] crate::Error),
}

pub type Result<T> = std::result::Result<T, ManifestError>;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Declared types in document order.
    #[serde(default)]
    pub types: IndexMap<String, TypeDef>,
    #[serde(default)]
    pub add: Vec<AddEntry>,
    #[serde(default)]
    pub unions: Vec<UnionEntry>,
}

/// A declared type: a named alias over a type reference, or a record.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum TypeDef {
    Alias(String),
    Record(RecordDef),
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordDef {
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub embedded: bool,
    #[serde(default)]
    pub ignore_nullability: bool,
    #[serde(default = "default_exported")]
    pub exported: bool,
}

fn default_exported() -> bool {
    true
}

/// A field's type: a reference, or an inline anonymous record.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum FieldType {
    Ref(String),
    Inline(RecordDef),
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum AddEntry {
    Ref(String),
    Detailed(AddDetail),
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddDetail {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnionEntry {
    /// Element type of the union.
    #[serde(rename = "type")]
    pub ty: String,
    pub values: serde_json::Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
}

impl FromStr for Manifest {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl Manifest {
    /// Build the descriptor graph for every declared type.
    ///
    /// Returns the graph together with the identity of each declared name.
    pub fn build_graph(&self) -> Result<(TypeGraph, HashMap<String, DescriptorId>)> {
        let resolver = self.resolver()?;
        Ok((resolver.graph, resolver.declared))
    }

    /// Run every registration against a fresh generator.
    pub fn generate(&self, config: Config) -> Result<Generator> {
        let mut resolver = self.resolver()?;

        // Registration targets may use the full syntax (`*T`, `[]T`, ...),
        // so resolve all of them before the graph moves into the generator.
        let adds = self
            .add
            .iter()
            .map(|entry| -> Result<_> {
                let (ty, name, namespace) = match entry {
                    AddEntry::Ref(ty) => (ty, None, None),
                    AddEntry::Detailed(d) => (&d.ty, d.name.as_deref(), d.namespace.as_deref()),
                };
                Ok((resolver.resolve_str(ty)?, name, namespace))
            })
            .collect::<Result<Vec<_>>>()?;
        let unions = self
            .unions
            .iter()
            .map(|entry| -> Result<_> { Ok((resolver.resolve_str(&entry.ty)?, entry)) })
            .collect::<Result<Vec<_>>>()?;

        let mut generator = Generator::with_graph(resolver.graph, config);
        for (id, name, namespace) in adds {
            generator.add_descriptor(id, name, namespace)?;
        }
        for (element, entry) in unions {
            generator.add_union_values(
                element,
                &entry.values,
                entry.name.as_deref(),
                entry.namespace.as_deref(),
            )?;
        }
        debug!(
            declarations = generator.registry().len(),
            "manifest generated"
        );
        Ok(generator)
    }

    fn resolver(&self) -> Result<Resolver<'_>> {
        let mut graph = TypeGraph::new();
        let declared = self
            .types
            .keys()
            .map(|name| (name.clone(), graph.reserve()))
            .collect();

        let mut resolver = Resolver {
            manifest: self,
            graph,
            declared,
            visiting: HashSet::new(),
        };
        for name in self.types.keys() {
            resolver.define(name)?;
        }
        resolver.check_pointer_cycles()?;
        Ok(resolver)
    }
}

struct Resolver<'m> {
    manifest: &'m Manifest,
    graph: TypeGraph,
    declared: HashMap<String, DescriptorId>,
    /// Aliases whose shape is being copied from another declared name.
    visiting: HashSet<&'m str>,
}

impl<'m> Resolver<'m> {
    fn lookup(&self, name: &str) -> Result<DescriptorId> {
        self.declared
            .get(name)
            .copied()
            .ok_or_else(|| ManifestError::UnknownType {
                name: name.to_string(),
            })
    }

    fn define(&mut self, name: &'m str) -> Result<()> {
        let id = self.lookup(name)?;
        if self.graph.is_defined(id) {
            return Ok(());
        }
        let manifest = self.manifest;
        let Some(def) = manifest.types.get(name) else {
            return Err(ManifestError::UnknownType {
                name: name.to_string(),
            });
        };
        if !self.visiting.insert(name) {
            return Err(ManifestError::AliasCycle {
                name: name.to_string(),
            });
        }

        let shape = match def {
            TypeDef::Record(record) => Shape::Record(self.fields(record)?),
            TypeDef::Alias(target) => self.alias_shape(&typeref::parse(target)?)?,
        };
        self.visiting.remove(name);
        self.graph.define(id, Descriptor::new(name, shape));
        Ok(())
    }

    /// Shape of a declared alias. An alias of another declared name copies
    /// that type's shape under its own name.
    fn alias_shape(&mut self, target: &TypeRef) -> Result<Shape> {
        Ok(match target {
            TypeRef::Named(other) => {
                let manifest = self.manifest;
                let (other, _) = manifest.types.get_key_value(other.as_str()).ok_or_else(|| {
                    ManifestError::UnknownType {
                        name: other.clone(),
                    }
                })?;
                self.define(other)?;
                let id = self.lookup(other)?;
                self.graph.shape(id).clone()
            }
            TypeRef::Primitive(kind) => Shape::Primitive(*kind),
            TypeRef::Dynamic => Shape::Dynamic,
            TypeRef::Timestamp => Shape::Timestamp,
            TypeRef::Pointer(inner) => Shape::Pointer(self.resolve(inner)?),
            TypeRef::Collection(element) => Shape::Collection {
                element: self.resolve(element)?,
                len: None,
            },
            TypeRef::FixedCollection(len, element) => Shape::Collection {
                element: self.resolve(element)?,
                len: Some(*len),
            },
            TypeRef::Mapping(key, value) => Shape::Mapping {
                key: self.resolve(key)?,
                value: self.resolve(value)?,
            },
        })
    }

    fn fields(&mut self, record: &RecordDef) -> Result<Vec<Field>> {
        record.fields.iter().map(|def| self.field(def)).collect()
    }

    fn field(&mut self, def: &FieldDef) -> Result<Field> {
        let ty = match &def.ty {
            FieldType::Ref(ty) => self.resolve_str(ty)?,
            FieldType::Inline(record) => {
                let fields = self.fields(record)?;
                self.graph.record("", fields)
            }
        };
        let tag = match &def.tag {
            Some(tag) => FieldTag::parse(tag).map_err(|source| ManifestError::Tag {
                field: def.name.clone(),
                source,
            })?,
            None => FieldTag::default(),
        };

        let mut field = Field::new(def.name.as_str(), ty).with_tag(tag);
        field.embedded = def.embedded;
        field.ignore_nullability = def.ignore_nullability;
        field.exported = def.exported;
        Ok(field)
    }

    fn resolve_str(&mut self, input: &str) -> Result<DescriptorId> {
        let ty = typeref::parse(input)?;
        self.resolve(&ty)
    }

    /// Descriptor for a reference appearing inside another type. Declared
    /// names resolve to their reserved identity.
    fn resolve(&mut self, ty: &TypeRef) -> Result<DescriptorId> {
        Ok(match ty {
            TypeRef::Named(name) => self.lookup(name)?,
            TypeRef::Primitive(kind) => self.graph.primitive(*kind),
            TypeRef::Dynamic => self.graph.dynamic(),
            TypeRef::Timestamp => self.graph.timestamp(),
            TypeRef::Pointer(inner) => {
                let inner = self.resolve(inner)?;
                self.graph.pointer(inner)
            }
            TypeRef::Collection(element) => {
                let element = self.resolve(element)?;
                self.graph.collection(element)
            }
            TypeRef::FixedCollection(len, element) => {
                let element = self.resolve(element)?;
                self.graph.fixed_collection(element, *len)
            }
            TypeRef::Mapping(key, value) => {
                let key = self.resolve(key)?;
                let value = self.resolve(value)?;
                self.graph.mapping(key, value)
            }
        })
    }

    /// A declared type that is only pointers back to itself has no shape.
    fn check_pointer_cycles(&self) -> Result<()> {
        for name in self.manifest.types.keys() {
            let mut seen = HashSet::new();
            let mut id = self.lookup(name)?;
            while let Shape::Pointer(inner) = self.graph.shape(id) {
                if !seen.insert(id) {
                    return Err(ManifestError::AliasCycle { name: name.clone() });
                }
                id = *inner;
            }
        }
        Ok(())
    }
}
