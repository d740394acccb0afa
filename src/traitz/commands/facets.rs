use crate::commands::CmdResult;
use crate::index::{SelectionState, TraitIndex};
use crate::model::Record;
use crate::ordering::{sorted_trait_types, sorted_values};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetValue {
    pub value: String,
    /// Records in the whole collection carrying this value.
    pub count: usize,
    pub checked: bool,
}

/// One trait type as presented: values in display order with their counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    pub trait_type: String,
    pub values: Vec<FacetValue>,
}

/// Lists the index in display order: trait types sorted plainly, values by
/// [`compare_values`](crate::ordering::compare_values).
pub fn run(records: &[Record], index: &TraitIndex, selection: &SelectionState) -> CmdResult {
    let facets = sorted_trait_types(index)
        .into_iter()
        .map(|trait_type| {
            let values = index
                .values(&trait_type)
                .map(sorted_values)
                .unwrap_or_default()
                .into_iter()
                .map(|value| FacetValue {
                    count: records
                        .iter()
                        .filter(|r| r.has_pair(&trait_type, &value))
                        .count(),
                    checked: selection
                        .is_checked(&trait_type, &value)
                        .unwrap_or(false),
                    value,
                })
                .collect();
            Facet { trait_type, values }
        })
        .collect();

    CmdResult::default().with_facets(facets)
}
