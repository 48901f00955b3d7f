//! The data literal embedded in the page script.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::{Value, json};

use crate::models::{DirectoryEntry, INDEX_FILE_NAME};

// Characters that would change the meaning of a relative URL path segment
const HREF_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'\\');

/// Builds the relative link `{path}/index.html` with the directory name percent-encoded
///
/// # Examples
///
/// ```
/// use dir_index::render::script::href_for;
///
/// assert_eq!(href_for("my notes"), "my%20notes/index.html");
/// assert_eq!(href_for("it's_a_dir"), "it's_a_dir/index.html");
/// ```
pub fn href_for(path: &str) -> String {
    format!("{}/{}", utf8_percent_encode(path, HREF_ENCODE_SET), INDEX_FILE_NAME)
}

/// Serializes entries into a JavaScript array literal that is safe inside a `<script>` element
pub fn data_literal(entries: &[DirectoryEntry]) -> String {
    let array: Vec<Value> = entries
        .iter()
        .map(|entry| {
            // Keys in sorted order so output is stable with or without `preserve_order`
            json!({
                "href": href_for(&entry.path),
                "name": entry.name,
                "path": entry.path,
            })
        })
        .collect();
    harden_for_script(&Value::Array(array).to_string())
}

/// Re-escapes characters that JSON leaves literal but a script element or quoted JS literal can't hold
fn harden_for_script(json: &str) -> String {
    let mut result = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' | '>' | '&' | '\'' | '\u{2028}' | '\u{2029}' => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => result.push(c),
        }
    }
    result
}
