//! HTML rendering of the directory index.
//!
//! The page lists entries twice: a script builds the live list from an embedded data
//! array, and a `<noscript>` block carries the same links as static markup. Every value
//! is escaped for the context it lands in, so [`render_index`] is total over its input.

pub mod script;
pub mod template;

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::{DirectoryEntry, Locale};
use script::{data_literal, href_for};

/// Render the full HTML document for `entries`
///
/// Output depends only on the arguments, so identical input gives byte-identical output.
///
/// # Examples
///
/// ```
/// use dir_index::models::{DirectoryEntry, Locale};
/// use dir_index::render::render_index;
///
/// let html = render_index(&[DirectoryEntry::new("About", "about")], Locale::English);
/// assert!(html.contains("about/index.html"));
/// ```
pub fn render_index(entries: &[DirectoryEntry], locale: Locale) -> String {
    let text = locale.text();
    template::page(&text, &noscript_fallback(entries, text.empty_message), &data_literal(entries))
}

fn noscript_fallback(entries: &[DirectoryEntry], empty_message: &str) -> String {
    let mut markup = String::new();
    if entries.is_empty() {
        // Writing into a String cannot fail
        let _ = writeln!(
            markup,
            "                <div class=\"empty-state\"><p>{}</p></div>",
            encode_text(empty_message)
        );
        return markup;
    }

    for entry in entries {
        let _ = writeln!(
            markup,
            "                <a class=\"directory-item\" href=\"{}\">{}</a>",
            encode_double_quoted_attribute(&href_for(&entry.path)),
            encode_text(&entry.name)
        );
    }
    markup
}
