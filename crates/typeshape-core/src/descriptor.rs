//! Descriptor, shape and field definitions.
//!
//! A descriptor is the engine's view of one host type. Descriptors live in a
//! [`TypeGraph`](crate::TypeGraph) and refer to each other by [`DescriptorId`],
//! which is also their identity: two ids are the same type exactly when they
//! are equal.

use std::str::FromStr;

use crate::PrimitiveKind;

/// Identity of a descriptor within its graph.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct DescriptorId(pub(crate) u32);

impl DescriptorId {
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One host type.
#[derive(Clone, Debug, PartialEq)]
pub struct Descriptor {
    /// Declared name, empty for anonymous and inline shapes.
    pub name: String,
    pub shape: Shape,
}

impl Descriptor {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }

    pub fn anonymous(shape: Shape) -> Self {
        Self::new(String::new(), shape)
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    /// Whether this descriptor is a true alias: named, and the name is not
    /// just the primitive's own name (`u32` named "u32" is not an alias,
    /// `Offset` over `i64` is). The timestamp built-in is never an alias.
    pub fn is_alias(&self) -> bool {
        if self.is_anonymous() {
            return false;
        }
        match &self.shape {
            Shape::Primitive(kind) => self.name != kind.name(),
            Shape::Timestamp => false,
            _ => true,
        }
    }

    /// Name used in diagnostics: the declared name, or a short shape summary.
    pub fn display_name(&self) -> String {
        if !self.is_anonymous() {
            return self.name.clone();
        }
        self.shape.summary().to_string()
    }
}

/// Structural shape of a descriptor.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Primitive(PrimitiveKind),
    /// Optional indirection: the value may be absent.
    Pointer(DescriptorId),
    /// Record with fields in declaration order.
    Record(Vec<Field>),
    /// Sequence of elements. `len` is set for fixed-length collections.
    Collection {
        element: DescriptorId,
        len: Option<usize>,
    },
    Mapping {
        key: DescriptorId,
        value: DescriptorId,
    },
    /// Value of any shape, decided at runtime.
    Dynamic,
    /// Built-in point in time, serialized as text.
    Timestamp,
}

impl Shape {
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Self::Primitive(kind) => kind.name(),
            Self::Pointer(_) => "pointer",
            Self::Record(_) => "record",
            Self::Collection { len: Some(_), .. } => "array",
            Self::Collection { len: None, .. } => "collection",
            Self::Mapping { .. } => "mapping",
            Self::Dynamic => "dynamic",
            Self::Timestamp => "timestamp",
        }
    }
}

/// A record field.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    /// Name as declared on the host type.
    pub name: String,
    pub ty: DescriptorId,
    /// Unexported fields never appear in the output.
    pub exported: bool,
    /// Anonymous composition: the field's record is spliced into its parent.
    pub embedded: bool,
    pub tag: FieldTag,
    /// Suppress `| null` for everything first reached through this field.
    pub ignore_nullability: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: DescriptorId) -> Self {
        Self {
            name: name.into(),
            ty,
            exported: true,
            embedded: false,
            tag: FieldTag::default(),
            ignore_nullability: false,
        }
    }

    /// An embedded field, named after its type as host languages do.
    pub fn embed(name: impl Into<String>, ty: DescriptorId) -> Self {
        Self {
            embedded: true,
            ..Self::new(name, ty)
        }
    }

    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.tag.rename = Some(name.into());
        self
    }

    pub fn omit_empty(mut self) -> Self {
        self.tag.omit_empty = true;
        self
    }

    pub fn skip(mut self) -> Self {
        self.tag.skip = true;
        self
    }

    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    pub fn ignore_nullability(mut self) -> Self {
        self.ignore_nullability = true;
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn with_tag(mut self, tag: FieldTag) -> Self {
        self.tag = tag;
        self
    }

    /// Output property name: the tag override, else the declared name.
    pub fn output_name(&self) -> &str {
        self.tag.rename.as_deref().unwrap_or(&self.name)
    }
}

/// Serialization tag attached to a field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldTag {
    pub rename: Option<String>,
    pub omit_empty: bool,
    pub skip: bool,
}

/// Error returned for a malformed tag.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported tag option `{option}` in `{tag}`")]
pub struct ParseTagError {
    pub tag: String,
    pub option: String,
}

impl FieldTag {
    /// Parse the compact `name,option,...` form.
    ///
    /// An empty name keeps the field's own name, a lone `-` skips the field,
    /// and `-,` names the property `-`. `omitempty` is the only option.
    pub fn parse(tag: &str) -> Result<Self, ParseTagError> {
        if tag == "-" {
            return Ok(Self {
                skip: true,
                ..Self::default()
            });
        }

        let mut parts = tag.split(',');
        let name = parts.next().unwrap_or_default();
        let mut parsed = Self {
            rename: (!name.is_empty()).then(|| name.to_string()),
            ..Self::default()
        };

        for option in parts {
            match option {
                "omitempty" => parsed.omit_empty = true,
                "" => {}
                _ => {
                    return Err(ParseTagError {
                        tag: tag.to_string(),
                        option: option.to_string(),
                    });
                }
            }
        }
        Ok(parsed)
    }
}

impl FromStr for FieldTag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
