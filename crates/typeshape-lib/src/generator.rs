//! The public generator facade.

use std::io::Write;

use serde::Serialize;
use tracing::debug;
use typeshape_core::{Describe, DescriptorId, Shape, TypeGraph};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::render::Renderer;
use crate::translate::Translator;

/// Collects declarations for a set of host types and renders them.
///
/// Registration is idempotent per descriptor identity and the first
/// registration decides the name. A fatal error poisons the generator: every
/// later call fails with [`Error::Poisoned`] until [`reset`](Self::reset).
///
/// ```
/// use typeshape_core::{Describe, DescriptorId, Field, TypeGraph};
/// use typeshape_lib::Generator;
///
/// struct Position;
///
/// impl Describe for Position {
///     fn describe(graph: &mut TypeGraph) -> DescriptorId {
///         graph.describe_record::<Self, _>("Position", |g| {
///             vec![Field::new("X", g.describe::<i64>()), Field::new("Y", g.describe::<i64>())]
///         })
///     }
/// }
///
/// let mut generator = Generator::new();
/// generator.add::<Position>().unwrap();
/// let schema = generator.render_to_string().unwrap();
/// assert!(schema.contains("export interface Position {\n\tX: number;\n\tY: number;\n}\n"));
/// ```
#[derive(Debug, Default)]
pub struct Generator {
    graph: TypeGraph,
    registry: Registry,
    config: Config,
    poisoned: bool,
}

/// Treat an empty name the same as no name.
fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_graph(TypeGraph::new(), config)
    }

    /// Generate from a descriptor graph built elsewhere.
    pub fn with_graph(graph: TypeGraph, config: Config) -> Self {
        Self {
            graph,
            registry: Registry::new(),
            config,
            poisoned: false,
        }
    }

    pub fn graph(&self) -> &TypeGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut TypeGraph {
        &mut self.graph
    }

    pub fn describe<T: Describe + ?Sized>(&mut self) -> DescriptorId {
        self.graph.describe::<T>()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Forget every declaration and the anonymous numbering. The graph and
    /// configuration are kept.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.poisoned = false;
    }

    pub fn add<T: Describe + ?Sized>(&mut self) -> Result<()> {
        let id = self.graph.describe::<T>();
        self.add_descriptor(id, None, None)
    }

    /// Same as [`add`](Self::add), with the type taken from a value.
    pub fn add_value<T: Describe + ?Sized>(&mut self, _value: &T) -> Result<()> {
        self.add::<T>()
    }

    pub fn add_with_name<T: Describe + ?Sized>(&mut self, name: &str) -> Result<()> {
        let id = self.graph.describe::<T>();
        self.add_descriptor(id, Some(name), None)
    }

    pub fn add_to_namespace<T: Describe + ?Sized>(&mut self, namespace: &str) -> Result<()> {
        let id = self.graph.describe::<T>();
        self.add_descriptor(id, None, Some(namespace))
    }

    pub fn add_with_name_to_namespace<T: Describe + ?Sized>(
        &mut self,
        name: &str,
        namespace: &str,
    ) -> Result<()> {
        let id = self.graph.describe::<T>();
        self.add_descriptor(id, Some(name), Some(namespace))
    }

    /// Register a descriptor from this generator's graph.
    pub fn add_descriptor(
        &mut self,
        id: DescriptorId,
        name: Option<&str>,
        namespace: Option<&str>,
    ) -> Result<()> {
        self.guard(|graph, registry| {
            Translator::new(graph, registry)
                .declare(id, non_empty(namespace), non_empty(name))
                .map(|_| ())
        })
    }

    /// Register each descriptor in order, stopping at the first error.
    pub fn add_multiple(&mut self, ids: impl IntoIterator<Item = DescriptorId>) -> Result<()> {
        for id in ids {
            self.add_descriptor(id, None, None)?;
        }
        Ok(())
    }

    /// Declare the element type of `values` as the union of those values.
    pub fn add_union<C>(&mut self, values: &C) -> Result<()>
    where
        C: Describe + Serialize + ?Sized,
    {
        self.add_union_with_name_to_namespace(values, "", "")
    }

    pub fn add_union_with_name<C>(&mut self, values: &C, name: &str) -> Result<()>
    where
        C: Describe + Serialize + ?Sized,
    {
        self.add_union_with_name_to_namespace(values, name, "")
    }

    pub fn add_union_to_namespace<C>(&mut self, values: &C, namespace: &str) -> Result<()>
    where
        C: Describe + Serialize + ?Sized,
    {
        self.add_union_with_name_to_namespace(values, "", namespace)
    }

    pub fn add_union_with_name_to_namespace<C>(
        &mut self,
        values: &C,
        name: &str,
        namespace: &str,
    ) -> Result<()>
    where
        C: Describe + Serialize + ?Sized,
    {
        if self.poisoned {
            return Err(Error::Poisoned);
        }
        let sequence = self.graph.describe::<C>();
        let element = match self.graph.shape(sequence) {
            Shape::Collection { element, .. } => *element,
            _ => {
                return Err(Error::NotASequence {
                    found: self.graph.get(sequence).display_name(),
                });
            }
        };
        let values = serde_json::to_value(values)?;
        self.add_union_values(element, &values, Some(name), Some(namespace))
    }

    /// Declare `element` as the union of pre-serialized `values`, which must
    /// be a JSON array.
    pub fn add_union_values(
        &mut self,
        element: DescriptorId,
        values: &serde_json::Value,
        name: Option<&str>,
        namespace: Option<&str>,
    ) -> Result<()> {
        self.guard(|graph, registry| {
            Translator::new(graph, registry)
                .declare_union(element, values, non_empty(name), non_empty(namespace))
                .map(|_| ())
        })
    }

    pub fn render(&self, w: &mut impl Write) -> Result<()> {
        if self.poisoned {
            return Err(Error::Poisoned);
        }
        Renderer::new(&self.registry, &self.config).render(w)?;
        Ok(())
    }

    pub fn render_to_string(&self) -> Result<String> {
        let mut out = Vec::new();
        self.render(&mut out)?;
        // Every piece written is a `str`.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    fn guard<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&TypeGraph, &mut Registry) -> Result<T>,
    {
        if self.poisoned {
            return Err(Error::Poisoned);
        }
        let result = f(&self.graph, &mut self.registry);
        if let Err(err) = &result
            && err.is_fatal()
        {
            debug!(error = %err, "generator poisoned");
            self.poisoned = true;
        }
        result
    }
}
