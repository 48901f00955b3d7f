//! Sort orders for qualifying directories. Both compare the raw directory name.

use std::cmp::Ordering;

use crate::indexer::naming::is_all_digits;
use crate::models::{DirectoryEntry, OrderingPolicy};

/// Compares two raw directory names under `policy`
pub fn compare_names(a: &str, b: &str, policy: OrderingPolicy) -> Ordering {
    match policy {
        OrderingPolicy::Lexicographic => a.cmp(b),
        OrderingPolicy::NumericFirst => numeric_first(a, b),
    }
}

/// Sorts entries in place by their raw `path`
pub fn sort_entries(entries: &mut [DirectoryEntry], policy: OrderingPolicy) {
    entries.sort_by(|a, b| compare_names(&a.path, &b.path, policy));
}

fn numeric_first(a: &str, b: &str) -> Ordering {
    match (is_all_digits(a), is_all_digits(b)) {
        (true, true) => compare_digit_strings(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// Numeric comparison of ASCII digit strings of any length, tie-broken by raw text
fn compare_digit_strings(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str], policy: OrderingPolicy) -> Vec<String> {
        let mut entries: Vec<DirectoryEntry> =
            names.iter().map(|n| DirectoryEntry::new(*n, *n)).collect();
        sort_entries(&mut entries, policy);
        entries.into_iter().map(|e| e.path).collect()
    }

    #[test]
    fn test_numeric_first_ordering() {
        assert_eq!(
            sorted(&["10", "2", "apple", "1"], OrderingPolicy::NumericFirst),
            vec!["1", "2", "10", "apple"]
        );
    }

    #[test]
    fn test_lexicographic_ordering() {
        assert_eq!(
            sorted(&["10", "2", "apple", "1"], OrderingPolicy::Lexicographic),
            vec!["1", "10", "2", "apple"]
        );
    }

    #[test]
    fn test_lexicographic_is_case_sensitive() {
        assert_eq!(
            sorted(&["beta", "Alpha", "alpha"], OrderingPolicy::Lexicographic),
            vec!["Alpha", "alpha", "beta"]
        );
    }

    #[test]
    fn test_numeric_first_non_digits_sorted_lexicographically() {
        assert_eq!(
            sorted(&["zeta", "3", "alpha", "3a"], OrderingPolicy::NumericFirst),
            vec!["3", "3a", "alpha", "zeta"]
        );
    }

    #[test]
    fn test_numeric_first_zero_padding() {
        assert_eq!(
            sorted(&["010", "9", "0009", "1"], OrderingPolicy::NumericFirst),
            vec!["1", "0009", "9", "010"]
        );
    }

    #[test]
    fn test_numeric_first_handles_huge_numbers() {
        assert_eq!(
            compare_names(
                "123456789012345678901234567890",
                "99999999999999999999",
                OrderingPolicy::NumericFirst
            ),
            Ordering::Greater
        );
    }
}
