use crate::naming::AnonymousNames;

#[test]
fn names_are_sequential_from_one() {
    let mut names = AnonymousNames::new();
    assert_eq!(names.issued(), 0);
    assert_eq!(names.issue(), "Anonymous1");
    assert_eq!(names.issue(), "Anonymous2");
    assert_eq!(names.issue(), "Anonymous3");
    assert_eq!(names.issued(), 3);
}
