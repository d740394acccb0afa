use crate::commands::filter::{evaluate, FilterOptions};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::SelectionState;
use crate::model::Record;

/// Flips one (trait type, value) flag and recomputes the filtered result.
///
/// The flag must come from the current index; anything else is an
/// [`InvalidKey`](crate::error::TraitzError::InvalidKey) and changes nothing.
pub fn run(
    records: &[Record],
    selection: &mut SelectionState,
    trait_type: &str,
    value: &str,
    options: &FilterOptions,
) -> Result<CmdResult> {
    let checked = selection.toggle(trait_type, value)?;
    tracing::debug!(trait_type, value, checked, "toggled selection");

    let outcome = evaluate(records, selection, options);

    let verb = if checked { "Checked" } else { "Unchecked" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{}: {} = {}",
        verb, trait_type, value
    )));
    Ok(result.with_outcome(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TraitzError;
    use crate::index::TraitIndex;
    use crate::store::memory::fixtures::{creatures, red_blue};

    #[test]
    fn toggles_and_recomputes() {
        let records = red_blue();
        let (_, mut selection) = TraitIndex::build(&records);

        let result = run(
            &records,
            &mut selection,
            "Color",
            "Red",
            &FilterOptions::default(),
        )
        .unwrap();

        let outcome = result.outcome.unwrap();
        assert_eq!(outcome.records, vec![records[0].clone()]);
        assert_eq!(result.messages[0].content, "Checked: Color = Red");
    }

    #[test]
    fn toggling_twice_restores_state_and_result() {
        let records = creatures();
        let options = FilterOptions::default();
        let (_, mut selection) = TraitIndex::build(&records);
        run(&records, &mut selection, "Habitat", "Land", &options).unwrap();

        let before_selection = selection.clone();
        let before = evaluate(&records, &selection, &options);

        run(&records, &mut selection, "Color", "Red", &options).unwrap();
        let result = run(&records, &mut selection, "Color", "Red", &options).unwrap();

        assert_eq!(selection, before_selection);
        assert_eq!(result.outcome.unwrap(), before);
        assert_eq!(result.messages[0].content, "Unchecked: Color = Red");
    }

    #[test]
    fn unknown_pair_leaves_selection_untouched() {
        let records = red_blue();
        let (_, mut selection) = TraitIndex::build(&records);
        selection.toggle("Color", "Blue").unwrap();
        let before = selection.clone();

        let err = run(
            &records,
            &mut selection,
            "Color",
            "Purple",
            &FilterOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(err, TraitzError::InvalidKey { .. }));
        assert_eq!(selection, before);
    }
}
