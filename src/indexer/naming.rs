//! Display-name derivation for scanned directories.

use crate::models::NamingPolicy;

/// Prefix placed before a Persian ordinal ("session")
const ORDINAL_PREFIX: &str = "جلسه";

/// Persian ordinal words for 1 through 20, indexed by `n - 1`
const PERSIAN_ORDINALS: [&str; 20] = [
    "اول",
    "دوم",
    "سوم",
    "چهارم",
    "پنجم",
    "ششم",
    "هفتم",
    "هشتم",
    "نهم",
    "دهم",
    "یازدهم",
    "دوازدهم",
    "سیزدهم",
    "چهاردهم",
    "پانزدهم",
    "شانزدهم",
    "هفدهم",
    "هجدهم",
    "نوزدهم",
    "بیستم",
];

/// Returns true for a non-empty string made only of ASCII digits
pub fn is_all_digits(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

/// Looks up the Persian ordinal word for `n`, if the table covers it
pub fn persian_ordinal(n: u32) -> Option<&'static str> {
    let index = usize::try_from(n).ok()?.checked_sub(1)?;
    PERSIAN_ORDINALS.get(index).copied()
}

/// Computes the label shown for a directory named `raw`
///
/// # Examples
///
/// ```
/// use dir_index::indexer::naming::display_name;
/// use dir_index::models::NamingPolicy;
///
/// assert_eq!(display_name("getting-started", NamingPolicy::Generic), "Getting Started");
/// assert_eq!(display_name("7", NamingPolicy::Generic), "Directory 7");
/// assert_eq!(display_name("21", NamingPolicy::LocalizedOrdinal), "21");
/// ```
pub fn display_name(raw: &str, policy: NamingPolicy) -> String {
    match policy {
        NamingPolicy::Generic => generic_name(raw),
        NamingPolicy::LocalizedOrdinal => ordinal_name(raw),
    }
}

fn generic_name(raw: &str) -> String {
    if is_all_digits(raw) {
        return format!("Directory {}", raw);
    }
    title_case(&separators_to_spaces(raw))
}

fn ordinal_name(raw: &str) -> String {
    if is_all_digits(raw) {
        // Overflowing digit strings are out of table range too
        return match raw.parse::<u32>().ok().and_then(persian_ordinal) {
            Some(ordinal) => format!("{} {}", ORDINAL_PREFIX, ordinal),
            None => raw.to_string(),
        };
    }
    separators_to_spaces(raw)
}

fn separators_to_spaces(raw: &str) -> String {
    raw.replace(['_', '-'], " ")
}

/// Upper-cases the first cased letter of each word and lower-cases the rest
///
/// Any character without case starts a new word, so `hello.world` becomes `Hello.World`
/// and `v2beta` becomes `V2Beta`. An apostrophe directly after a letter does not, which
/// keeps `it's` as `It's`.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_cased = false;
    for c in text.chars() {
        if is_cased(c) {
            if previous_is_cased {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_cased = true;
        } else {
            result.push(c);
            previous_is_cased = previous_is_cased && c == '\'';
        }
    }
    result
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}
