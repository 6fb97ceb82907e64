//! HTML Escaping
//!
//! Converts text so that any markup in it is displayed literally.

use std::fmt;

/// Characters reserved in HTML and their entity sequences
pub const ESCAPE_MAP: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
];

#[inline]
fn entity(c: char) -> Option<&'static str> {
    ESCAPE_MAP.iter().find(|(raw, _)| *raw == c).map(|(_, e)| *e)
}

/// Escape any displayable value for use as HTML text or attribute value.
///
/// Not idempotent: escaping twice turns `&amp;` into `&amp;amp;`.
pub fn escape_html(input: impl fmt::Display) -> String {
    let text = input.to_string();
    let mut output = String::with_capacity(text.len());
    escape_html_into(&text, &mut output);
    output
}

/// Append the escaped form of `input` to `output`
pub fn escape_html_into(input: &str, output: &mut String) {
    let mut copied = 0;
    for (i, c) in input.char_indices() {
        if let Some(e) = entity(c) {
            output.push_str(&input[copied..i]);
            output.push_str(e);
            copied = i + c.len_utf8();
        }
    }
    output.push_str(&input[copied..]);
}
