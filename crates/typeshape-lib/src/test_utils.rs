//! Test utilities and shared host types.

use std::collections::HashMap;
use std::time::SystemTime;

use serde::Serialize;
use typeshape_core::{Describe, Descriptor, DescriptorId, Field, PrimitiveKind, Shape, TypeGraph};

use crate::{Config, DEFAULT_HEADER, Generator};

/// Generator indenting with four spaces, so expected output can use `indoc!`.
pub(crate) fn generator() -> Generator {
    Generator::with_config(Config::new().indent_width(4))
}

/// Rendered schema without the header line and the blank line after it.
pub(crate) fn body(generator: &Generator) -> String {
    let schema = generator.render_to_string().unwrap();
    schema
        .strip_prefix(DEFAULT_HEADER)
        .unwrap()
        .trim_start_matches('\n')
        .to_string()
}

pub(crate) struct Position;

impl Describe for Position {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.describe_record::<Self, _>("Position", |g| {
            vec![
                Field::new("X", g.describe::<i64>()),
                Field::new("Y", g.describe::<i64>()),
            ]
        })
    }
}

pub(crate) struct Alpha;

impl Describe for Alpha {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.describe_record::<Self, _>("Alpha", |g| vec![Field::new("A", g.describe::<u8>())])
    }
}

/// A string alias that the union tests turn into a literal union.
#[derive(Clone, Copy, Serialize)]
pub(crate) struct Direction(pub &'static str);

pub(crate) const ALL_DIRECTIONS: [Direction; 4] = [
    Direction("up"),
    Direction("down"),
    Direction("left"),
    Direction("right"),
];

impl Describe for Direction {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.describe_named::<Self, _>("Direction", |_| Shape::Primitive(PrimitiveKind::String))
    }
}

pub(crate) struct Turtle;

impl Describe for Turtle {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.describe_record::<Self, _>("Turtle", |g| {
            vec![
                Field::new("Position", g.describe::<Position>()).rename("Coordinates"),
                Field::new("Color", g.describe::<Alpha>()),
                Field::new("Direction", g.describe::<Direction>()),
            ]
        })
    }
}

pub(crate) struct OtherStruct;

impl Describe for OtherStruct {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.describe_record::<Self, _>("OtherStruct", |g| {
            vec![Field::new("T", g.describe::<SystemTime>()).rename("t").omit_empty()]
        })
    }
}

pub(crate) struct Mode;

impl Describe for Mode {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.describe_named::<Self, _>("Mode", |_| Shape::Primitive(PrimitiveKind::String))
    }
}

pub(crate) struct Offset;

impl Describe for Offset {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.describe_named::<Self, _>("Offset", |_| Shape::Primitive(PrimitiveKind::I64))
    }
}

/// Free-form object: string keys, dynamic values.
pub(crate) struct Data;

impl Describe for Data {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.describe_named::<Self, _>("Data", |g| Shape::Mapping {
            key: g.describe::<String>(),
            value: g.describe::<serde_json::Value>(),
        })
    }
}

/// An unnamed record used as a field type.
pub(crate) struct Inline;

impl Describe for Inline {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.describe_with::<Self, _>(|g, _| {
            Descriptor::anonymous(Shape::Record(vec![Field::new("A", g.describe::<isize>())]))
        })
    }
}

/// Every field shape the translator knows, in one record.
pub(crate) struct ComplexStruct;

impl Describe for ComplexStruct {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.describe_record::<Self, _>("ComplexStruct", |g| {
            vec![
                Field::new("String", g.describe::<String>()),
                Field::new("StringWithAnnotation", g.describe::<String>()).rename("s"),
                Field::new("Bool", g.describe::<bool>()),
                Field::new("Int", g.describe::<isize>()),
                Field::new("Float64", g.describe::<f64>()),
                Field::new("Time", g.describe::<SystemTime>()),
                Field::new("Other", g.describe::<OtherStruct>()),
                Field::new("OtherPtr", g.describe::<Option<OtherStruct>>()),
                Field::new("OptionalString", g.describe::<String>()).omit_empty(),
                Field::new("OptionalInt", g.describe::<isize>()).omit_empty(),
                Field::new("OptionalFloat64", g.describe::<f64>()).omit_empty(),
                Field::new("OptionalTime", g.describe::<SystemTime>()).omit_empty(),
                Field::new("OptionalOtherStruct", g.describe::<OtherStruct>()).omit_empty(),
                Field::new("OptionalOtherStructPtr", g.describe::<Option<OtherStruct>>())
                    .omit_empty(),
                Field::new("Data", g.describe::<Data>()),
                Field::new("DataPtr", g.describe::<Option<Data>>()),
                Field::new("MapStringSlice", g.describe::<HashMap<String, Vec<String>>>()),
                Field::new(
                    "MapStringSliceSlice",
                    g.describe::<HashMap<String, Vec<Vec<String>>>>(),
                ),
                Field::new(
                    "MapStringPtrSlice",
                    g.describe::<HashMap<String, Vec<Option<String>>>>(),
                ),
                Field::new("MapIntKeys", g.describe::<HashMap<isize, String>>()),
                Field::new("MapStringAliasKeys", g.describe::<HashMap<Mode, String>>()),
                Field::new("MapIntAliasKeys", g.describe::<HashMap<Offset, String>>()),
                Field::new("MapOtherStruct", g.describe::<HashMap<String, OtherStruct>>()),
                Field::new(
                    "MapOtherStructPtr",
                    g.describe::<HashMap<String, Option<OtherStruct>>>(),
                ),
                Field::new("Slice", g.describe::<Vec<String>>()),
                Field::new("SliceOfSlice", g.describe::<Vec<Vec<String>>>()),
                Field::new("SliceOfData", g.describe::<Vec<Data>>()),
                Field::new("MapOfData", g.describe::<HashMap<String, Data>>()),
                Field::new("MapOfSliceOfData", g.describe::<HashMap<String, Vec<Data>>>()),
                Field::new(
                    "MapOfMapOfSliceOfData",
                    g.describe::<HashMap<String, HashMap<String, Vec<Data>>>>(),
                ),
                Field::new("Mode", g.describe::<Mode>()),
                Field::new("InlineStruct", g.describe::<Inline>()),
                Field::new("Array", g.describe::<[String; 3]>()),
                Field::new("skipped", g.describe::<bool>()).private(),
                Field::new("Offset", g.describe::<Offset>()),
                Field::new("Color", g.describe::<Alpha>()),
                Field::new("Direction", g.describe::<Direction>()),
                Field::new("NotSerialized", g.describe::<String>()).skip(),
            ]
        })
    }
}

/// A record that is its own parent and child list.
pub(crate) struct Node;

impl Describe for Node {
    fn describe(graph: &mut TypeGraph) -> DescriptorId {
        graph.describe_record::<Self, _>("Node", |g| {
            vec![
                Field::new("Value", g.describe::<String>()),
                Field::new("Parent", g.describe::<Option<Box<Node>>>()),
                Field::new("Children", g.describe::<Vec<Node>>()),
            ]
        })
    }
}
