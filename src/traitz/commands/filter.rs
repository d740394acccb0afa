//! Filter evaluation.
//!
//! The active filter set is the flat list of checked (trait type, value) pairs. A
//! record matches when it carries **every** pair in that list. Grouping by trait type
//! plays no part: checking `Color = Red` and `Color = Blue` together asks for records
//! that have both attributes, which a record with a single color never satisfies.

use crate::error::{Result, TraitzError};
use crate::index::SelectionState;
use crate::model::{Record, DEFAULT_SENTINEL_NAME};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the result holds when nothing is checked or nothing matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoMatchPolicy {
    /// A single placeholder record.
    #[default]
    Sentinel,
    /// No records at all.
    Empty,
}

impl fmt::Display for NoMatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoMatchPolicy::Sentinel => write!(f, "sentinel"),
            NoMatchPolicy::Empty => write!(f, "empty"),
        }
    }
}

impl FromStr for NoMatchPolicy {
    type Err = TraitzError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sentinel" => Ok(NoMatchPolicy::Sentinel),
            "empty" => Ok(NoMatchPolicy::Empty),
            other => Err(TraitzError::Config(format!(
                "Unknown policy: {} (expected sentinel or empty)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub policy: NoMatchPolicy,
    pub sentinel_name: String,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            policy: NoMatchPolicy::default(),
            sentinel_name: DEFAULT_SENTINEL_NAME.to_string(),
        }
    }
}

impl FilterOptions {
    pub fn new(policy: NoMatchPolicy, sentinel_name: impl Into<String>) -> Self {
        Self {
            policy,
            sentinel_name: sentinel_name.into(),
        }
    }
}

/// The filtered result plus what presentation needs to tell its cases apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub records: Vec<Record>,
    /// Real records matched; zero whenever nothing is checked.
    pub matched: usize,
    pub all_unchecked: bool,
    pub is_sentinel: bool,
}

impl FilterOutcome {
    /// The outcome of a reset: nothing checked, nothing shown.
    pub fn cleared() -> Self {
        Self {
            records: Vec::new(),
            matched: 0,
            all_unchecked: true,
            is_sentinel: false,
        }
    }

    fn nothing(all_unchecked: bool, options: &FilterOptions) -> Self {
        let (records, is_sentinel) = match options.policy {
            NoMatchPolicy::Sentinel => (vec![Record::sentinel(&options.sentinel_name)], true),
            NoMatchPolicy::Empty => (Vec::new(), false),
        };
        Self {
            records,
            matched: 0,
            all_unchecked,
            is_sentinel,
        }
    }
}

pub fn matches(record: &Record, active: &[(&str, &str)]) -> bool {
    active
        .iter()
        .all(|(trait_type, value)| record.has_pair(trait_type, value))
}

/// Computes the filtered result for the current selection.
///
/// Matching records keep their collection order.
pub fn evaluate(
    records: &[Record],
    selection: &SelectionState,
    options: &FilterOptions,
) -> FilterOutcome {
    if selection.all_unchecked() {
        return FilterOutcome::nothing(true, options);
    }

    let active = selection.active_pairs();
    let matched: Vec<Record> = records
        .iter()
        .filter(|record| matches(record, &active))
        .cloned()
        .collect();

    tracing::debug!(
        active = active.len(),
        matched = matched.len(),
        "evaluated filter"
    );

    if matched.is_empty() {
        return FilterOutcome::nothing(false, options);
    }

    FilterOutcome {
        matched: matched.len(),
        records: matched,
        all_unchecked: false,
        is_sentinel: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::TraitIndex;
    use crate::store::memory::fixtures::{creatures, red_blue};

    fn names(outcome: &FilterOutcome) -> Vec<&str> {
        outcome.records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn nothing_checked_yields_sentinel_by_default() {
        let records = red_blue();
        let (_, selection) = TraitIndex::build(&records);

        let outcome = evaluate(&records, &selection, &FilterOptions::default());
        assert!(outcome.all_unchecked);
        assert!(outcome.is_sentinel);
        assert_eq!(names(&outcome), vec!["NONE_SENTINEL"]);
        assert_eq!(outcome.matched, 0);
    }

    #[test]
    fn nothing_checked_yields_empty_under_empty_policy() {
        let records = red_blue();
        let (_, selection) = TraitIndex::build(&records);
        let options = FilterOptions::new(NoMatchPolicy::Empty, "unused");

        let outcome = evaluate(&records, &selection, &options);
        assert!(outcome.all_unchecked);
        assert!(!outcome.is_sentinel);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn single_pair_selects_matching_records() {
        let records = red_blue();
        let (_, mut selection) = TraitIndex::build(&records);
        selection.toggle("Color", "Red").unwrap();

        let outcome = evaluate(&records, &selection, &FilterOptions::default());
        assert_eq!(names(&outcome), vec!["A"]);
        assert_eq!(outcome.matched, 1);
        assert!(!outcome.is_sentinel);
    }

    #[test]
    fn two_values_of_one_trait_are_both_required() {
        let records = red_blue();
        let (_, mut selection) = TraitIndex::build(&records);
        selection.toggle("Color", "Red").unwrap();
        selection.toggle("Color", "Blue").unwrap();

        let outcome = evaluate(&records, &selection, &FilterOptions::default());
        assert!(outcome.is_sentinel);
        assert!(!outcome.all_unchecked);

        let options = FilterOptions::new(NoMatchPolicy::Empty, "");
        assert!(evaluate(&records, &selection, &options).records.is_empty());
    }

    #[test]
    fn record_with_repeated_trait_satisfies_both_values() {
        let records = creatures();
        let (_, mut selection) = TraitIndex::build(&records);
        selection.toggle("Habitat", "Land").unwrap();
        selection.toggle("Habitat", "Pond").unwrap();

        let outcome = evaluate(&records, &selection, &FilterOptions::default());
        assert_eq!(names(&outcome), vec!["Frog"]);
    }

    #[test]
    fn pairs_across_traits_are_anded_in_collection_order() {
        let records = creatures();
        let (_, mut selection) = TraitIndex::build(&records);
        selection.toggle("Habitat", "Land").unwrap();

        let outcome = evaluate(&records, &selection, &FilterOptions::default());
        assert_eq!(names(&outcome), vec!["Ant", "Frog", "Snail"]);

        selection.toggle("Color", "Red").unwrap();
        let outcome = evaluate(&records, &selection, &FilterOptions::default());
        assert_eq!(names(&outcome), vec!["Ant"]);
    }

    #[test]
    fn custom_sentinel_name() {
        let records = red_blue();
        let (_, selection) = TraitIndex::build(&records);
        let options = FilterOptions::new(NoMatchPolicy::Sentinel, "存在しない");

        let outcome = evaluate(&records, &selection, &options);
        assert_eq!(names(&outcome), vec!["存在しない"]);
    }

    #[test]
    fn policy_parses_and_prints() {
        assert_eq!("empty".parse::<NoMatchPolicy>().unwrap(), NoMatchPolicy::Empty);
        assert_eq!(NoMatchPolicy::Sentinel.to_string(), "sentinel");
        assert!("none".parse::<NoMatchPolicy>().is_err());
    }
}
