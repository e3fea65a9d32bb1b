//! Type expressions: the right-hand side of every property and alias.

use std::fmt;

use typeshape_core::DescriptorId;

use crate::Registry;

/// Built-in target types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    Any,
    Null,
}

impl Primitive {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Any => "any",
            Self::Null => "null",
        }
    }
}

/// Key type of an index signature. Nothing else is legal there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexKey {
    String,
    Number,
}

impl IndexKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    Number,
    Boolean,
}

/// A literal type. `raw` is already in target syntax (strings quoted).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    pub kind: LiteralKind,
    pub raw: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// A declared type, resolved to its current name when rendered.
    Reference(DescriptorId),
    Primitive(Primitive),
    Array(Box<TypeExpr>),
    Mapping {
        key: IndexKey,
        value: Box<TypeExpr>,
    },
    /// Never nested and never holds `null` twice.
    Union(Vec<TypeExpr>),
    Literal(Literal),
}

impl TypeExpr {
    pub const STRING: Self = Self::Primitive(Primitive::String);
    pub const NUMBER: Self = Self::Primitive(Primitive::Number);
    pub const BOOLEAN: Self = Self::Primitive(Primitive::Boolean);
    pub const ANY: Self = Self::Primitive(Primitive::Any);
    pub const NULL: Self = Self::Primitive(Primitive::Null);

    pub fn array(element: TypeExpr) -> Self {
        Self::Array(Box::new(element))
    }

    pub fn mapping(key: IndexKey, value: TypeExpr) -> Self {
        Self::Mapping {
            key,
            value: Box::new(value),
        }
    }

    /// Union of `members`, splicing nested unions in place.
    pub fn union(members: impl IntoIterator<Item = TypeExpr>) -> Self {
        let mut flat = Vec::new();
        for member in members {
            match member {
                Self::Union(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        Self::Union(flat)
    }

    /// `self | null`, without repeating `null`.
    pub fn nullable(self) -> Self {
        match self {
            Self::Primitive(Primitive::Null) => self,
            Self::Union(mut members) => {
                if !members.contains(&Self::NULL) {
                    members.push(Self::NULL);
                }
                Self::Union(members)
            }
            other => Self::Union(vec![other, Self::NULL]),
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Primitive(Primitive::Null) => true,
            Self::Union(members) => members.contains(&Self::NULL),
            _ => false,
        }
    }

    /// Render against `registry`, which supplies names for references.
    pub fn display<'a>(&'a self, registry: &'a Registry) -> ExprDisplay<'a> {
        ExprDisplay {
            expr: self,
            registry,
        }
    }
}

pub struct ExprDisplay<'a> {
    expr: &'a TypeExpr,
    registry: &'a Registry,
}

impl ExprDisplay<'_> {
    fn nested<'b>(&'b self, expr: &'b TypeExpr) -> ExprDisplay<'b> {
        ExprDisplay {
            expr,
            registry: self.registry,
        }
    }
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expr {
            TypeExpr::Reference(id) => {
                let decl = self.registry.ensure_declared(*id);
                match decl.namespace() {
                    Some(ns) => write!(f, "{ns}.{}", decl.name()),
                    None => f.write_str(decl.name()),
                }
            }
            TypeExpr::Primitive(p) => f.write_str(p.as_str()),
            TypeExpr::Array(element) => match element.as_ref() {
                TypeExpr::Union(_) => write!(f, "({})[]", self.nested(element)),
                _ => write!(f, "{}[]", self.nested(element)),
            },
            TypeExpr::Mapping { key, value } => {
                write!(f, "{{ [key: {}]: {} }}", key.as_str(), self.nested(value))
            }
            TypeExpr::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", self.nested(member))?;
                }
                Ok(())
            }
            TypeExpr::Literal(lit) => f.write_str(&lit.raw),
        }
    }
}
