//! # Trait Index
//!
//! The trait index is the facet catalogue of a record collection: every trait type
//! seen in the collection, each with the distinct non-empty values recorded under it.
//!
//! Both trait types and values keep **first-encounter order**. Display ordering is a
//! separate concern handled by [`crate::ordering`]; nothing here sorts.
//!
//! The index is a pure function of the collection. It is built once per load by
//! [`TraitIndex::build`], which also returns the matching [`SelectionState`] with
//! every (trait type, value) pair unchecked. The two structures always cover exactly
//! the same pairs: the selection is never extended after the build, only flipped.

use crate::error::{Result, TraitzError};
use crate::model::Record;
use std::collections::{HashMap, HashSet};

/// The distinct values recorded under one trait type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitValues {
    pub trait_type: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraitIndex {
    traits: Vec<TraitValues>,
}

impl TraitIndex {
    /// Builds the index and an all-unchecked selection from a record collection.
    pub fn build(records: &[Record]) -> (TraitIndex, SelectionState) {
        let mut traits: Vec<TraitValues> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut seen: HashSet<(&str, &str)> = HashSet::new();

        for record in records {
            for attr in &record.attributes {
                // Empty values never reach the index, not even as a bare trait type.
                if attr.is_empty() {
                    continue;
                }
                if !seen.insert((attr.trait_type.as_str(), attr.value.as_str())) {
                    continue;
                }

                let pos = *positions
                    .entry(attr.trait_type.as_str())
                    .or_insert_with(|| {
                        traits.push(TraitValues {
                            trait_type: attr.trait_type.clone(),
                            values: Vec::new(),
                        });
                        traits.len() - 1
                    });
                traits[pos].values.push(attr.value.clone());
            }
        }

        tracing::debug!(
            trait_types = traits.len(),
            values = seen.len(),
            records = records.len(),
            "built trait index"
        );

        let index = TraitIndex { traits };
        let selection = SelectionState::unchecked(&index);
        (index, selection)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraitValues> {
        self.traits.iter()
    }

    pub fn trait_types(&self) -> impl Iterator<Item = &str> {
        self.traits.iter().map(|t| t.trait_type.as_str())
    }

    /// Values under a trait type, in first-seen order.
    pub fn values(&self, trait_type: &str) -> Option<&[String]> {
        self.traits
            .iter()
            .find(|t| t.trait_type == trait_type)
            .map(|t| t.values.as_slice())
    }

    pub fn contains(&self, trait_type: &str, value: &str) -> bool {
        self.values(trait_type)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Total number of (trait type, value) pairs.
    pub fn pair_count(&self) -> usize {
        self.traits.iter().map(|t| t.values.len()).sum()
    }
}

/// Checked flags for one trait type, in the index's value order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitSelection {
    pub trait_type: String,
    pub values: Vec<(String, bool)>,
}

/// Which values are checked, per trait type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    traits: Vec<TraitSelection>,
}

impl SelectionState {
    pub fn unchecked(index: &TraitIndex) -> Self {
        let traits = index
            .iter()
            .map(|t| TraitSelection {
                trait_type: t.trait_type.clone(),
                values: t.values.iter().map(|v| (v.clone(), false)).collect(),
            })
            .collect();
        Self { traits }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraitSelection> {
        self.traits.iter()
    }

    /// Whether the pair is checked, or `None` if the pair is not indexed.
    pub fn is_checked(&self, trait_type: &str, value: &str) -> Option<bool> {
        self.traits
            .iter()
            .find(|t| t.trait_type == trait_type)?
            .values
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, checked)| *checked)
    }

    /// Negates one flag and returns its new state.
    ///
    /// Fails with [`TraitzError::InvalidKey`] for pairs the index never produced,
    /// leaving every flag untouched.
    pub fn toggle(&mut self, trait_type: &str, value: &str) -> Result<bool> {
        let flag = self
            .traits
            .iter_mut()
            .find(|t| t.trait_type == trait_type)
            .and_then(|t| t.values.iter_mut().find(|(v, _)| v == value))
            .map(|(_, checked)| checked)
            .ok_or_else(|| TraitzError::invalid_key(trait_type, value))?;

        *flag = !*flag;
        Ok(*flag)
    }

    pub fn all_unchecked(&self) -> bool {
        self.traits
            .iter()
            .all(|t| t.values.iter().all(|(_, checked)| !checked))
    }

    /// The checked pairs, trait by trait in index order.
    pub fn active_pairs(&self) -> Vec<(&str, &str)> {
        self.traits
            .iter()
            .flat_map(|t| {
                t.values
                    .iter()
                    .filter(|(_, checked)| *checked)
                    .map(move |(v, _)| (t.trait_type.as_str(), v.as_str()))
            })
            .collect()
    }

    pub fn clear(&mut self) {
        for t in &mut self.traits {
            for (_, checked) in &mut t.values {
                *checked = false;
            }
        }
    }
}
