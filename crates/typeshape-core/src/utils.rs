/// Uppercase the first character, leaving the rest untouched.
///
/// Declared type names become interface names this way, so `point` and
/// `Point` both render as `Point` while `HTTPStatus` keeps its casing.
///
/// # Examples
/// ```
/// use typeshape_core::utils::capitalize;
/// assert_eq!(capitalize("position"), "Position");
/// assert_eq!(capitalize("HTTPStatus"), "HTTPStatus");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
