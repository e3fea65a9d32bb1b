//! Top-level declarations.

use super::TypeExpr;

#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub name: String,
    /// Rendered as `name?:`.
    pub optional: bool,
    pub ty: TypeExpr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Interface {
    pub name: String,
    pub namespace: Option<String>,
    pub properties: Vec<Property>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alias {
    pub name: String,
    pub namespace: Option<String>,
    pub ty: TypeExpr,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    Interface(Interface),
    Alias(Alias),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Interface(i) => &i.name,
            Self::Alias(a) => &a.name,
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        match self {
            Self::Interface(i) => i.namespace.as_deref(),
            Self::Alias(a) => a.namespace.as_deref(),
        }
    }

    pub fn as_interface(&self) -> Option<&Interface> {
        match self {
            Self::Interface(i) => Some(i),
            Self::Alias(_) => None,
        }
    }

    pub fn as_alias(&self) -> Option<&Alias> {
        match self {
            Self::Alias(a) => Some(a),
            Self::Interface(_) => None,
        }
    }
}
