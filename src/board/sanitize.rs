//! Escaping of user-supplied text before it is stored.

use std::borrow::Cow;

/// Escape a value for use as HTML text content.
///
/// `&`, `<` and `>` become entities; quotes are left alone since stored
/// values are never placed inside attributes.
pub fn escape_html_data(input: &str) -> Cow<'_, str> {
    html_escape::encode_text(input)
}
