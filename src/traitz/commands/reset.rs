use crate::commands::filter::FilterOutcome;
use crate::commands::{CmdMessage, CmdResult};
use crate::index::SelectionState;

/// Unchecks everything and clears the result, whatever the no-match policy.
pub fn run(selection: &mut SelectionState) -> CmdResult {
    let cleared = selection.active_pairs().len();
    selection.clear();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Cleared {} selection(s)", cleared)));
    result.with_outcome(FilterOutcome::cleared())
}
