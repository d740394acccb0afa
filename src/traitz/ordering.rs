//! Display ordering for trait values.
//!
//! Values such as `Type1`, `Type2`, `Type10` should read in numeric order, so each
//! value is split into a leading non-digit prefix and the digit run right after it.
//! Prefixes decide first; equal prefixes fall back to the number. Prefixes compare
//! the way a locale collator would: accents and case only break ties.
//!
//! A value with no digits sorts before any numbered sibling under the same prefix,
//! and two digitless values with the same prefix compare equal. Sorting is stable,
//! so equal values keep their first-seen order.

use crate::index::TraitIndex;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Splits a value into its leading non-digit prefix and the digit run that follows.
pub fn split_value(value: &str) -> (&str, Option<&str>) {
    let prefix_end = value
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(value.len());
    let (prefix, rest) = value.split_at(prefix_end);

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];

    (prefix, (!digits.is_empty()).then_some(digits))
}

pub fn compare_values(a: &str, b: &str) -> Ordering {
    let (prefix_a, digits_a) = split_value(a);
    let (prefix_b, digits_b) = split_value(b);

    if prefix_a == prefix_b {
        return match (digits_a, digits_b) {
            (Some(x), Some(y)) => compare_digit_runs(x, y),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
    }

    compare_text(prefix_a, prefix_b)
}

/// Compares two ASCII digit runs by numeric value without parsing them.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

// Ordered like a locale collator at default strength: base letters, then accents,
// then case with lowercase first. Exact code points break any remaining tie.
fn compare_text(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| uppercase_marks(a).cmp(uppercase_marks(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn uppercase_marks(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

/// Returns the values of one trait type in display order.
pub fn sorted_values(values: &[String]) -> Vec<String> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| compare_values(a, b));
    sorted
}

/// Returns the trait types of an index in plain string order.
pub fn sorted_trait_types(index: &TraitIndex) -> Vec<String> {
    let mut types: Vec<String> = index.trait_types().map(str::to_string).collect();
    types.sort();
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn sorted(values: &[&str]) -> Vec<String> {
        let owned: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        sorted_values(&owned)
    }

    #[test]
    fn splits_prefix_and_digits() {
        assert_eq!(split_value("Type10"), ("Type", Some("10")));
        assert_eq!(split_value("Alpha"), ("Alpha", None));
        assert_eq!(split_value("42"), ("", Some("42")));
        assert_eq!(split_value("v2.5"), ("v", Some("2")));
        assert_eq!(split_value(""), ("", None));
    }

    #[test]
    fn prefix_then_number() {
        assert_eq!(
            sorted(&["Type1", "Type10", "Type2", "Alpha"]),
            vec!["Alpha", "Type1", "Type2", "Type10"]
        );
    }

    #[test]
    fn digitless_value_sorts_before_numbered_sibling() {
        assert_eq!(
            sorted(&["Type2", "Type", "Type1"]),
            vec!["Type", "Type1", "Type2"]
        );
    }

    #[test]
    fn digitless_values_with_same_prefix_keep_order() {
        // Equal prefixes without digits compare equal; the stable sort keeps input order.
        assert_eq!(compare_values("Same", "Same"), Ordering::Equal);
        assert_eq!(sorted(&["Gold", "Gold"]), vec!["Gold", "Gold"]);
    }

    #[test]
    fn numbers_compare_by_value_not_text() {
        assert_eq!(compare_values("Lv9", "Lv10"), Ordering::Less);
        assert_eq!(compare_values("Lv007", "Lv7"), Ordering::Equal);
        assert_eq!(
            compare_values("n99999999999999999999999", "n100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn pure_numbers_sort_numerically() {
        assert_eq!(sorted(&["10", "9", "100", "1"]), vec!["1", "9", "10", "100"]);
    }

    #[test]
    fn prefix_comparison_ignores_case_first() {
        assert_eq!(
            sorted(&["banana", "Apple", "cherry"]),
            vec!["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn lowercase_wins_a_case_tie() {
        assert_eq!(compare_values("apple", "Apple"), Ordering::Less);
        assert_eq!(sorted(&["Apple", "apple"]), vec!["apple", "Apple"]);
    }

    #[test]
    fn accents_only_break_ties() {
        assert_eq!(compare_values("Éclair", "Fig"), Ordering::Less);
        assert_eq!(
            sorted(&["Fig", "Éclair", "Apple"]),
            vec!["Apple", "Éclair", "Fig"]
        );
        assert_eq!(compare_values("resume", "résumé"), Ordering::Less);
        // Precomposed and decomposed spellings land together.
        assert_eq!(
            sorted(&["Café", "Cafz", "Cafe\u{301}"]),
            vec!["Cafe\u{301}", "Café", "Cafz"]
        );
    }

    #[test]
    fn trait_types_sort_plainly() {
        let records = vec![Record::new("A", "")
            .with_attribute("Mouth", "Smile")
            .with_attribute("Background", "Blue")
            .with_attribute("Eyes", "Closed")];
        let (index, _) = TraitIndex::build(&records);

        assert_eq!(
            sorted_trait_types(&index),
            vec!["Background", "Eyes", "Mouth"]
        );
        // The index itself keeps first-seen order.
        assert_eq!(index.trait_types().next(), Some("Mouth"));
    }
}
