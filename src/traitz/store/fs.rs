use super::{LoadOutcome, RecordSource};
use crate::error::{Result, TraitzError};
use crate::model::Record;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// How records are laid out inside the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLayout {
    /// `1.json` ..= `{count}.json`, one record each.
    Numbered { count: usize },
    /// A single JSON array of records.
    Combined { file: String },
    /// `Combined` if the file exists, otherwise `Numbered`.
    Auto { count: usize, file: String },
}

pub struct FileSource {
    root: PathBuf,
    layout: SourceLayout,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>, layout: SourceLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }
}

impl RecordSource for FileSource {
    fn load_all(&self) -> Result<LoadOutcome> {
        match &self.layout {
            SourceLayout::Numbered { count } => load_numbered(&self.root, *count),
            SourceLayout::Combined { file } => load_combined(&self.root.join(file)),
            SourceLayout::Auto { count, file } => {
                let combined = self.root.join(file);
                if combined.is_file() {
                    load_combined(&combined)
                } else {
                    tracing::debug!(
                        path = %combined.display(),
                        "no combined file, reading numbered records"
                    );
                    load_numbered(&self.root, *count)
                }
            }
        }
    }

    fn describe(&self) -> String {
        match &self.layout {
            SourceLayout::Numbered { count } => {
                format!("{} (1..={}.json)", self.root.display(), count)
            }
            SourceLayout::Combined { file } => self.root.join(file).display().to_string(),
            SourceLayout::Auto { count, file } => format!(
                "{} ({} or 1..={}.json)",
                self.root.display(),
                file,
                count
            ),
        }
    }
}

pub fn numbered_path(root: &Path, index: usize) -> PathBuf {
    root.join(format!("{}.json", index))
}

/// Numbered files kept as they were on disk, each checked to hold a record.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NumberedDocuments {
    pub documents: Vec<Value>,
    pub missing: Vec<usize>,
}

/// Reads `1.json ..= count.json`, skipping the ones that do not exist.
pub fn load_numbered(root: &Path, count: usize) -> Result<LoadOutcome> {
    let (records, missing) =
        read_numbered(root, count, |content| serde_json::from_str::<Record>(content))?;

    tracing::info!(
        loaded = records.len(),
        missing = missing.len(),
        "loaded numbered records"
    );
    Ok(LoadOutcome { records, missing })
}

/// Like [`load_numbered`], but keeps every field of each document.
pub fn load_numbered_documents(root: &Path, count: usize) -> Result<NumberedDocuments> {
    let (documents, missing) = read_numbered(root, count, |content| {
        let document: Value = serde_json::from_str(content)?;
        Record::deserialize(&document)?;
        Ok(document)
    })?;
    Ok(NumberedDocuments { documents, missing })
}

fn read_numbered<T>(
    root: &Path,
    count: usize,
    parse: impl Fn(&str) -> serde_json::Result<T>,
) -> Result<(Vec<T>, Vec<usize>)> {
    let mut items = Vec::new();
    let mut missing = Vec::new();

    for index in 1..=count {
        let path = numbered_path(root, index);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("File {}.json does not exist.", index);
                missing.push(index);
                continue;
            }
            Err(e) => return Err(TraitzError::load_failure(path.display().to_string(), e)),
        };

        let item =
            parse(&content).map_err(|e| TraitzError::load_failure(path.display().to_string(), e))?;
        items.push(item);
    }

    Ok((items, missing))
}

pub fn load_combined(path: &Path) -> Result<LoadOutcome> {
    let content = fs::read_to_string(path)
        .map_err(|e| TraitzError::load_failure(path.display().to_string(), e))?;
    let records: Vec<Record> = serde_json::from_str(&content)
        .map_err(|e| TraitzError::load_failure(path.display().to_string(), e))?;

    tracing::info!(loaded = records.len(), "loaded combined records");
    Ok(LoadOutcome {
        records,
        missing: Vec::new(),
    })
}
