//! HTML serialization helpers.
//!
//! - `escape()` - text content (`<`, `>`, `&`)
//! - `escape_attr()` - double-quoted attribute values (adds `"` and `'`)
//! - `is_void_element()` - elements written without a closing tag

use std::borrow::Cow;

const TEXT_CHARS: [char; 3] = ['<', '>', '&'];
const ATTR_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn entity(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape text content.
///
/// Borrows when nothing needs escaping.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &TEXT_CHARS)
}

/// Escape a double-quoted attribute value.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ATTR_CHARS)
}

fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match entity(c).filter(|_| chars.contains(&c)) {
            Some(e) => result.push_str(e),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Check if an HTML tag is a void element (self-closing).
#[inline]
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}
