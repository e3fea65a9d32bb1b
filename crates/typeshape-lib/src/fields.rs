//! Record field extraction.

use std::collections::HashSet;

use typeshape_core::{DescriptorId, Shape};

use crate::error::{Error, Location, Result};
use crate::translate::Translator;
use crate::ts::Property;

/// Properties collected for one interface.
struct Collected<'n> {
    interface: &'n str,
    properties: Vec<Property>,
    names: HashSet<String>,
    /// Records currently being spliced, to stop self-embedding.
    embedding: Vec<DescriptorId>,
}

impl Translator<'_> {
    /// Properties of `record` in declaration order, embedded records flattened.
    pub(crate) fn extract_fields(
        &mut self,
        record: DescriptorId,
        interface: &str,
        namespace: Option<&str>,
        suppress: bool,
    ) -> Result<Vec<Property>> {
        let mut collected = Collected {
            interface,
            properties: Vec::new(),
            names: HashSet::new(),
            embedding: Vec::new(),
        };
        self.collect_fields(record, namespace, suppress, false, &mut collected)?;
        Ok(collected.properties)
    }

    fn collect_fields(
        &mut self,
        record: DescriptorId,
        namespace: Option<&str>,
        suppress: bool,
        force_optional: bool,
        out: &mut Collected<'_>,
    ) -> Result<()> {
        let graph = self.graph;
        let Shape::Record(fields) = graph.shape(record) else {
            return Ok(());
        };
        out.embedding.push(record);

        for field in fields {
            if !field.exported || field.tag.skip {
                continue;
            }

            if field.embedded && field.tag.rename.is_none() {
                let (target, depth) = graph.strip_pointers(field.ty);
                if graph.shape(target).is_record() {
                    if out.embedding.contains(&target) {
                        continue;
                    }
                    self.collect_fields(
                        target,
                        namespace,
                        suppress || field.ignore_nullability,
                        force_optional || depth > 0,
                        out,
                    )?;
                    continue;
                }
            }

            let name = field.output_name();
            if !out.names.insert(name.to_string()) {
                return Err(Error::FieldCollision {
                    interface: out.interface.to_string(),
                    field: name.to_string(),
                });
            }

            self.location = Location::new(out.interface).field(field.name.as_str());
            let ty = self.translate(field.ty, namespace, suppress || field.ignore_nullability)?;
            out.properties.push(Property {
                name: name.to_string(),
                optional: field.tag.omit_empty || force_optional,
                ty,
            });
        }

        out.embedding.pop();
        Ok(())
    }
}
