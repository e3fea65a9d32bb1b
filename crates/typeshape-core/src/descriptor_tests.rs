use crate::{Descriptor, DescriptorId, Field, FieldTag, PrimitiveKind, Shape};

fn id(n: u32) -> DescriptorId {
    DescriptorId::from_raw(n)
}

#[test]
fn tag_plain_rename() {
    let tag = FieldTag::parse("coordinates").unwrap();
    assert_eq!(tag.rename.as_deref(), Some("coordinates"));
    assert!(!tag.omit_empty);
    assert!(!tag.skip);
}

#[test]
fn tag_omit_empty_without_rename() {
    let tag = FieldTag::parse(",omitempty").unwrap();
    assert_eq!(tag.rename, None);
    assert!(tag.omit_empty);
}

#[test]
fn tag_rename_and_omit_empty() {
    let tag: FieldTag = "object,omitempty".parse().unwrap();
    assert_eq!(tag.rename.as_deref(), Some("object"));
    assert!(tag.omit_empty);
}

#[test]
fn tag_dash_skips() {
    let tag = FieldTag::parse("-").unwrap();
    assert!(tag.skip);
    assert_eq!(tag.rename, None);
}

#[test]
fn tag_dash_comma_names_dash() {
    let tag = FieldTag::parse("-,").unwrap();
    assert!(!tag.skip);
    assert_eq!(tag.rename.as_deref(), Some("-"));
}

#[test]
fn tag_empty_is_default() {
    assert_eq!(FieldTag::parse("").unwrap(), FieldTag::default());
}

#[test]
fn tag_unknown_option() {
    let err = FieldTag::parse("id,string").unwrap_err();
    insta::assert_snapshot!(err, @"unsupported tag option `string` in `id,string`");
}

#[test]
fn field_builders() {
    let field = Field::new("Name", id(0))
        .rename("name")
        .omit_empty()
        .ignore_nullability();
    assert_eq!(field.output_name(), "name");
    assert!(field.tag.omit_empty);
    assert!(field.ignore_nullability);
    assert!(field.exported);
    assert!(!field.embedded);

    let hidden = Field::new("secret", id(0)).private();
    assert!(!hidden.exported);
    assert_eq!(hidden.output_name(), "secret");

    let embedded = Field::embed("Inner", id(1));
    assert!(embedded.embedded);
    assert!(Field::new("X", id(1)).embedded().embedded);
    assert!(Field::new("X", id(1)).skip().tag.skip);
}

#[test]
fn alias_classification() {
    let bare = Descriptor::new("i64", Shape::Primitive(PrimitiveKind::I64));
    assert!(!bare.is_alias());

    let alias = Descriptor::new("Offset", Shape::Primitive(PrimitiveKind::I64));
    assert!(alias.is_alias());

    let timestamp = Descriptor::new("timestamp", Shape::Timestamp);
    assert!(!timestamp.is_alias());

    let list = Descriptor::new("Names", Shape::Collection { element: id(0), len: None });
    assert!(list.is_alias());

    let anonymous = Descriptor::anonymous(Shape::Dynamic);
    assert!(anonymous.is_anonymous());
    assert!(!anonymous.is_alias());
}

#[test]
fn display_name_falls_back_to_shape() {
    assert_eq!(Descriptor::new("Turtle", Shape::Record(vec![])).display_name(), "Turtle");
    assert_eq!(Descriptor::anonymous(Shape::Record(vec![])).display_name(), "record");
    assert_eq!(
        Descriptor::anonymous(Shape::Collection { element: id(0), len: Some(3) }).display_name(),
        "array"
    );
    assert_eq!(Descriptor::anonymous(Shape::Pointer(id(0))).display_name(), "pointer");
}
