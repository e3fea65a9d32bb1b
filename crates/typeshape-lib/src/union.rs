//! Literal unions built from concrete values.

use serde_json::Value;
use tracing::debug;
use typeshape_core::{DescriptorId, PrimitiveKind, Shape};

use crate::error::{Error, Result};
use crate::translate::Translator;
use crate::ts::{Alias, Declaration, Literal, LiteralKind, TypeExpr};

fn literal_kind(kind: PrimitiveKind) -> Option<LiteralKind> {
    if kind.is_numeric() {
        return Some(LiteralKind::Number);
    }
    match kind {
        PrimitiveKind::Bool => Some(LiteralKind::Boolean),
        PrimitiveKind::Char | PrimitiveKind::String => Some(LiteralKind::String),
        _ => None,
    }
}

fn matches_kind(value: &Value, kind: LiteralKind, primitive: PrimitiveKind) -> bool {
    match (kind, value) {
        (LiteralKind::Boolean, Value::Bool(_)) => true,
        (LiteralKind::String, Value::String(s)) => {
            primitive != PrimitiveKind::Char || s.chars().count() == 1
        }
        (LiteralKind::Number, Value::Number(n)) => primitive.is_float() || !n.is_f64(),
        _ => false,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Translator<'_> {
    /// Declare `element` as the union of `values`, in order, duplicates kept.
    ///
    /// Every check runs before the registry is touched. An alias already
    /// registered for `element` is overwritten in place, so references to it
    /// render the union under its new name.
    pub(crate) fn declare_union(
        &mut self,
        element: DescriptorId,
        values: &Value,
        name: Option<&str>,
        namespace: Option<&str>,
    ) -> Result<DescriptorId> {
        let graph = self.graph;
        let descriptor = graph.get(element);
        let unsupported = || Error::UnsupportedUnionElement {
            element: descriptor.display_name(),
        };

        let Shape::Primitive(primitive) = descriptor.shape else {
            return Err(unsupported());
        };
        let kind = literal_kind(primitive).ok_or_else(unsupported)?;

        let name = match name {
            Some(name) => name.to_string(),
            None if descriptor.is_alias() => descriptor.name.clone(),
            None => {
                return Err(Error::MissingName {
                    shape: format!("union of {}", primitive.name()),
                });
            }
        };

        let Value::Array(items) = values else {
            return Err(Error::NotASequence {
                found: json_type_name(values).to_string(),
            });
        };
        if items.is_empty() {
            return Err(Error::EmptyUnion { name });
        }

        let mut members = Vec::with_capacity(items.len());
        for (index, value) in items.iter().enumerate() {
            if !matches_kind(value, kind, primitive) {
                return Err(Error::UnionValueMismatch {
                    index,
                    value: value.to_string(),
                    element: descriptor.display_name(),
                });
            }
            members.push(TypeExpr::Literal(Literal {
                kind,
                raw: value.to_string(),
            }));
        }
        let ty = TypeExpr::union(members);

        let shadows_interface = self
            .registry
            .interfaces()
            .any(|i| i.name == name && i.namespace.as_deref() == namespace);
        if shadows_interface {
            return Err(Error::UnionConflict { name });
        }
        let namespace = namespace.map(str::to_string);

        match self.registry.get_mut(element) {
            Some(Declaration::Alias(alias)) => {
                debug!(from = %alias.name, to = %name, "retrofitted alias into union");
                alias.name = name;
                alias.namespace = namespace;
                alias.ty = ty;
            }
            Some(Declaration::Interface(_)) => return Err(Error::UnionConflict { name }),
            None => {
                debug!(union = %name, "declared union");
                self.registry.get_or_create(element, |_| {
                    Declaration::Alias(Alias {
                        name,
                        namespace,
                        ty,
                    })
                });
            }
        }
        Ok(element)
    }
}
