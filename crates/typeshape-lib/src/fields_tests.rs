use indoc::indoc;
use typeshape_core::{Descriptor, Field, PrimitiveKind, Shape, TypeGraph};

use crate::{Config, Error, Generator};
use crate::test_utils::{body, generator};

#[test]
fn tags_rename_skip_and_optional() {
    let mut generator = generator();
    let graph = generator.graph_mut();
    let string = graph.primitive(PrimitiveKind::String);
    let int = graph.primitive(PrimitiveKind::U16);
    let user = graph.record(
        "User",
        vec![
            Field::new("Name", string).rename("name"),
            Field::new("Age", int).omit_empty(),
            Field::new("Password", string).skip(),
            Field::new("secret", string).private(),
        ],
    );
    generator.add_descriptor(user, None, None).unwrap();

    assert_eq!(
        body(&generator),
        indoc! {"
            export interface User {
                name: string;
                Age?: number;
            }
        "}
    );
}

#[test]
fn embedded_record_is_flattened_in_place() {
    let mut generator = generator();
    let graph = generator.graph_mut();
    let int = graph.primitive(PrimitiveKind::I64);
    let string = graph.primitive(PrimitiveKind::String);
    let base = graph.record("Base", vec![Field::new("ID", int), Field::new("Created", string)]);
    let post = graph.record(
        "Post",
        vec![
            Field::new("Title", string),
            Field::embed("Base", base),
            Field::new("Body", string),
        ],
    );
    generator.add_descriptor(post, None, None).unwrap();

    assert_eq!(
        body(&generator),
        indoc! {"
            export interface Post {
                Title: string;
                ID: number;
                Created: string;
                Body: string;
            }
        "}
    );
}

#[test]
fn embedded_pointer_makes_fields_optional() {
    let mut generator = generator();
    let graph = generator.graph_mut();
    let int = graph.primitive(PrimitiveKind::I64);
    let base = graph.record("Base", vec![Field::new("ID", int)]);
    let ptr = graph.pointer(base);
    let post = graph.record("Post", vec![Field::embed("Base", ptr)]);
    generator.add_descriptor(post, None, None).unwrap();

    assert_eq!(
        body(&generator),
        indoc! {"
            export interface Post {
                ID?: number;
            }
        "}
    );
}

#[test]
fn optional_embedding_reaches_nested_embeds() {
    let mut generator = generator();
    let graph = generator.graph_mut();
    let int = graph.primitive(PrimitiveKind::I64);
    let point = graph.record("Point", vec![Field::new("X", int), Field::new("Y", int)]);
    let shape = graph.record("Shape", vec![Field::embed("Point", point)]);
    let ptr = graph.pointer(shape);
    let sprite = graph.record(
        "Sprite",
        vec![Field::embed("Shape", ptr), Field::new("Z", int)],
    );
    generator.add_descriptor(sprite, None, None).unwrap();

    assert_eq!(
        body(&generator),
        indoc! {"
            export interface Sprite {
                X?: number;
                Y?: number;
                Z: number;
            }
        "}
    );
}

#[test]
fn renamed_embedded_record_is_a_property() {
    let mut generator = generator();
    let graph = generator.graph_mut();
    let int = graph.primitive(PrimitiveKind::I64);
    let base = graph.record("Base", vec![Field::new("ID", int)]);
    let post = graph.record("Post", vec![Field::embed("Base", base).rename("base")]);
    generator.add_descriptor(post, None, None).unwrap();

    assert_eq!(
        body(&generator),
        indoc! {"
            export interface Base {
                ID: number;
            }

            export interface Post {
                base: Base;
            }
        "}
    );
}

#[test]
fn embedded_non_record_is_a_plain_property() {
    let mut generator = generator();
    let graph = generator.graph_mut();
    let string = graph.primitive(PrimitiveKind::String);
    let wrapper = graph.record("Wrapper", vec![Field::embed("Label", string)]);
    generator.add_descriptor(wrapper, None, None).unwrap();

    assert_eq!(
        body(&generator),
        indoc! {"
            export interface Wrapper {
                Label: string;
            }
        "}
    );
}

#[test]
fn ignore_nullability_reaches_nested_declarations() {
    let mut generator = generator();
    let graph = generator.graph_mut();
    let string = graph.primitive(PrimitiveKind::String);
    let names = graph.collection(string);
    let ptr = graph.pointer(string);
    let inner = graph.record("Inner", vec![Field::new("Names", names), Field::new("Note", ptr)]);
    let outer = graph.record(
        "Outer",
        vec![
            Field::new("Inner", inner).ignore_nullability(),
            Field::new("Tags", names).ignore_nullability(),
            Field::new("Maybe", ptr),
        ],
    );
    generator.add_descriptor(outer, None, None).unwrap();

    assert_eq!(
        body(&generator),
        indoc! {"
            export interface Inner {
                Names: string[];
                Note: string;
            }

            export interface Outer {
                Inner: Inner;
                Tags: string[];
                Maybe: string | null;
            }
        "}
    );
}

#[test]
fn collision_between_embedded_and_own_field() {
    let mut generator = generator();
    let graph = generator.graph_mut();
    let int = graph.primitive(PrimitiveKind::I64);
    let base = graph.record("Base", vec![Field::new("ID", int)]);
    let post = graph.record("Post", vec![Field::embed("Base", base), Field::new("ID", int)]);

    let err = generator.add_descriptor(post, None, None).unwrap_err();
    insta::assert_snapshot!(err, @"interface `Post` has more than one property named `ID`");
    assert!(generator.is_poisoned());
}

#[test]
fn collision_between_two_embedded_records() {
    let mut generator = generator();
    let graph = generator.graph_mut();
    let int = graph.primitive(PrimitiveKind::I64);
    let left = graph.record("Left", vec![Field::new("X", int)]);
    let right = graph.record("Right", vec![Field::new("X", int)]);
    let both = graph.record(
        "Both",
        vec![Field::embed("Left", left), Field::embed("Right", right)],
    );

    let err = generator.add_descriptor(both, None, None).unwrap_err();
    insta::assert_snapshot!(err, @"interface `Both` has more than one property named `X`");
    assert!(generator.is_poisoned());
}

#[test]
fn collision_through_rename() {
    let mut generator = generator();
    let graph = generator.graph_mut();
    let string = graph.primitive(PrimitiveKind::String);
    let user = graph.record(
        "User",
        vec![Field::new("Name", string), Field::new("Alias", string).rename("Name")],
    );

    let err = generator.add_descriptor(user, None, None).unwrap_err();
    assert!(matches!(err, Error::FieldCollision { .. }));
}

#[test]
fn self_embedding_is_ignored() {
    let mut graph = TypeGraph::new();
    let string = graph.primitive(PrimitiveKind::String);
    let looped = graph.reserve();
    let ptr = graph.pointer(looped);
    graph.define(
        looped,
        Descriptor::new(
            "Looped",
            Shape::Record(vec![
                Field::new("Name", string),
                Field::embed("Looped", ptr),
            ]),
        ),
    );
    let mut generator = Generator::with_graph(graph, Config::new().indent_width(4));
    generator.add_descriptor(looped, None, None).unwrap();

    assert_eq!(
        body(&generator),
        indoc! {"
            export interface Looped {
                Name: string;
            }
        "}
    );
}

#[test]
fn unsupported_field_kind_reports_location() {
    let mut generator = generator();
    let graph = generator.graph_mut();
    let func = graph.primitive(PrimitiveKind::Function);
    let handler = graph.record("Handler", vec![Field::new("Callback", func)]);

    let err = generator.add_descriptor(handler, None, None).unwrap_err();
    insta::assert_snapshot!(err, @"kind `function` at Handler.Callback cannot be represented in a schema");
}
