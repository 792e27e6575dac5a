// src/domain/rules.rs
//
// Shared predicate families
//
// Every entity validator is built from these. They are total: a missing
// value is "invalid", never a fault.

use chrono::{NaiveDate, TimeDelta};

/// Minimum number of characters accepted for name and title searches
pub const MIN_SEARCH_TERM_LENGTH: usize = 2;

/// Minimum number of characters accepted for an ISBN
pub const MIN_ISBN_LENGTH: usize = 10;

/// Identifier is present and strictly positive
pub fn is_valid_id(id: Option<i64>) -> bool {
    matches!(id, Some(n) if n > 0)
}

/// Present and not whitespace-only
pub fn is_present_and_not_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Present and not the empty string. Whitespace-only passes.
pub fn is_present_and_not_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Present, not blank, and at least `min` characters long.
/// Length counts Unicode scalar values, not UTF-16 units: "😀" is 1, not 2.
pub fn has_min_length(value: Option<&str>, min: usize) -> bool {
    value.is_some_and(|v| !v.trim().is_empty() && v.chars().count() >= min)
}

/// Search terms: present, not blank, at least two characters
pub fn is_valid_search_term(term: Option<&str>) -> bool {
    has_min_length(term, MIN_SEARCH_TERM_LENGTH)
}

/// Shallow email rule: present and contains '@' somewhere.
/// Structure around the '@' is deliberately not inspected.
pub fn contains_at_sign(email: Option<&str>) -> bool {
    email.is_some_and(|e| e.contains('@'))
}

/// Present and non-negative
pub fn is_non_negative(count: Option<i32>) -> bool {
    matches!(count, Some(n) if n >= 0)
}

/// `date` moved forward or back by `days`, or `None` when the result
/// leaves chrono's calendar range
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_positivity() {
        assert!(is_valid_id(Some(1)));
        assert!(is_valid_id(Some(i64::MAX)));
        assert!(!is_valid_id(Some(0)));
        assert!(!is_valid_id(Some(-1)));
        assert!(!is_valid_id(Some(i64::MIN)));
        assert!(!is_valid_id(None));
    }

    #[test]
    fn test_blank_vs_empty() {
        assert!(!is_present_and_not_blank(Some("   ")));
        assert!(!is_present_and_not_blank(Some("\t\n")));
        assert!(is_present_and_not_empty(Some("   ")));

        assert!(!is_present_and_not_blank(Some("")));
        assert!(!is_present_and_not_empty(Some("")));

        assert!(!is_present_and_not_blank(None));
        assert!(!is_present_and_not_empty(None));
    }

    #[test]
    fn test_search_term_length() {
        assert!(!is_valid_search_term(Some("A")));
        assert!(is_valid_search_term(Some("Jo")));
        assert!(!is_valid_search_term(Some("")));
        assert!(!is_valid_search_term(Some("  ")));
        assert!(!is_valid_search_term(None));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // one character, two bytes
        assert!(!is_valid_search_term(Some("é")));
        assert!(is_valid_search_term(Some("Ém")));
    }

    #[test]
    fn test_at_sign() {
        assert!(contains_at_sign(Some("staff@library.com")));
        assert!(contains_at_sign(Some("staff@")));
        assert!(contains_at_sign(Some("@library.com")));
        assert!(contains_at_sign(Some("@")));
        assert!(!contains_at_sign(Some("invalidemail")));
        assert!(!contains_at_sign(Some("")));
        assert!(!contains_at_sign(None));
    }

    #[test]
    fn test_length_counts_scalar_values() {
        // outside the BMP: one scalar value, two UTF-16 units
        assert!(!is_valid_search_term(Some("😀")));
        assert!(is_valid_search_term(Some("😀😀")));
    }

    #[test]
    fn test_add_days() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(add_days(d, 2), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(add_days(d, -28), NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(add_days(d, 1_000_000_000), None);
        assert_eq!(add_days(d, i64::MAX), None);
    }
}
