use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::load_numbered_documents;
use std::fs;
use std::path::Path;

/// Joins `1.json ..= count.json` under `dir` into one JSON array at `output`.
///
/// Documents are written as read, extra fields included. Missing files are skipped
/// with a warning; a file that is not a record aborts the join before anything is
/// written.
pub fn run(dir: &Path, count: usize, output: &Path) -> Result<CmdResult> {
    let outcome = load_numbered_documents(dir, count)?;

    let mut result = CmdResult::default();
    for index in &outcome.missing {
        result.add_message(CmdMessage::warning(format!(
            "File {}.json does not exist.",
            index
        )));
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(&outcome.documents)?;
    fs::write(output, content)?;

    tracing::info!(
        joined = outcome.documents.len(),
        path = %output.display(),
        "wrote combined records"
    );
    result.add_message(CmdMessage::success(format!(
        "Combined JSON saved to {} ({} records)",
        output.display(),
        outcome.documents.len()
    )));
    Ok(result.with_output_path(output.to_path_buf()))
}
