//! Generator errors.

use std::fmt;

use typeshape_core::PrimitiveKind;

/// Where in the descriptor graph a translation failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub type_name: String,
    pub field: Option<String>,
}

impl Location {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            field: None,
        }
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}.{}", self.type_name, field),
            None => f.write_str(&self.type_name),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Kind has no data-interchange representation.
    #[error("kind `{kind}` at {location} cannot be represented in a schema")]
    UnsupportedKind {
        kind: PrimitiveKind,
        location: Location,
    },

    /// Index signatures only take string or number keys.
    #[error("map key `{key}` at {location} must be string- or number-like")]
    UnsupportedMapKey { key: String, location: Location },

    #[error("interface `{interface}` has more than one property named `{field}`")]
    FieldCollision { interface: String, field: String },

    #[error("cannot declare union `{name}`: already declared as an interface")]
    UnionConflict { name: String },

    #[error("union values must be a sequence, found {found}")]
    NotASequence { found: String },

    #[error("union `{name}` has no values")]
    EmptyUnion { name: String },

    #[error("union element `{element}` must be boolean, numeric or string")]
    UnsupportedUnionElement { element: String },

    #[error("union value {index} (`{value}`) does not match element `{element}`")]
    UnionValueMismatch {
        index: usize,
        value: String,
        element: String,
    },

    /// Non-record, non-alias descriptors need an explicit name.
    #[error("a {shape} needs an explicit name to be declared")]
    MissingName { shape: String },

    #[error("failed to serialize union values: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("generator is unusable after an earlier fatal error; call reset()")]
    Poisoned,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Fatal errors leave the registry partially built and poison the generator.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedKind { .. }
                | Self::UnsupportedMapKey { .. }
                | Self::FieldCollision { .. }
                | Self::UnionConflict { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
