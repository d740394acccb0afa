//! # Record Sources
//!
//! Records reach traitz through the [`RecordSource`] trait, a single "load all
//! records" call. Where the records live and in which shape is the source's
//! business; the rest of the crate only ever sees a finished [`LoadOutcome`].
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: production source over a data directory
//!   - Numbered layout: one record per file, `1.json` .. `N.json`
//!   - Combined layout: one pre-joined JSON array, `combined.json` by default
//!   - Auto layout: combined when present, numbered otherwise
//!
//! - [`memory::InMemorySource`]: in-memory source for testing
//!   - Numbered slots with gaps and malformed entries
//!
//! ## Failure Semantics
//!
//! ```text
//! missing numbered resource   -> warn, record index in `missing`, keep going
//! malformed payload           -> LoadFailure, nothing is returned
//! missing combined resource   -> LoadFailure
//! ```
//!
//! Sources never retry.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Everything a load produced: the records in order, plus the numbered
/// resources that were skipped because they do not exist.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub records: Vec<Record>,
    pub missing: Vec<usize>,
}

/// Abstract interface for loading a record collection.
pub trait RecordSource {
    /// Load the whole collection.
    fn load_all(&self) -> Result<LoadOutcome>;

    /// Human-readable location, used in messages.
    fn describe(&self) -> String;
}
