//! # API Facade
//!
//! [`TraitzApi`] is the session object every UI client talks to. It owns the whole
//! engine state: the record collection, the trait index built from it, the selection
//! flags, and the last filtered result.
//!
//! ## Lifecycle
//!
//! ```text
//!   new() ──► Unloaded ──load()──► Ready ──toggle()/reset()──► Ready
//!                ▲                   │
//!                └── failed load ◄───┘ (load() again)
//! ```
//!
//! While `Unloaded`, every index or filter operation fails with
//! [`TraitzError::NotReady`]. A successful `load()` replaces the collection and
//! rebuilds the index in the same call, so the index can never describe a
//! different collection than the one being filtered.
//!
//! ## Atomicity
//!
//! `toggle()` and `reset()` take `&mut self`: the flag change and the recomputed
//! result land together, and no reader can observe one without the other.
//!
//! ## Generic Over RecordSource
//!
//! - Production: `TraitzApi<FileSource>`
//! - Testing: `TraitzApi<InMemorySource>`

use crate::commands;
use crate::commands::filter::{evaluate, FilterOptions, FilterOutcome};
use crate::error::{Result, TraitzError};
use crate::index::{SelectionState, TraitIndex};
use crate::model::Record;
use crate::store::RecordSource;
use std::path::Path;

struct Loaded {
    records: Vec<Record>,
    index: TraitIndex,
    selection: SelectionState,
    result: FilterOutcome,
}

enum Phase {
    Unloaded,
    Ready(Loaded),
}

pub struct TraitzApi<S: RecordSource> {
    source: S,
    options: FilterOptions,
    phase: Phase,
}

impl<S: RecordSource> TraitzApi<S> {
    pub fn new(source: S, options: FilterOptions) -> Self {
        Self {
            source,
            options,
            phase: Phase::Unloaded,
        }
    }

    /// True until a load has completed successfully.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Unloaded)
    }

    /// Loads the collection and rebuilds the index and selection from it.
    ///
    /// Skipped resources are reported as warnings; a failed load leaves the
    /// session unloaded.
    pub fn load(&mut self) -> Result<commands::CmdResult> {
        self.phase = Phase::Unloaded;

        let outcome = self.source.load_all()?;
        let (index, selection) = TraitIndex::build(&outcome.records);
        let result = evaluate(&outcome.records, &selection, &self.options);

        let mut cmd = commands::CmdResult::default();
        for missing in &outcome.missing {
            cmd.add_message(commands::CmdMessage::warning(format!(
                "Record {} does not exist, skipped.",
                missing
            )));
        }
        cmd.add_message(commands::CmdMessage::info(format!(
            "Loaded {} records ({} trait types) from {}",
            outcome.records.len(),
            index.len(),
            self.source.describe()
        )));

        self.phase = Phase::Ready(Loaded {
            records: outcome.records,
            index,
            selection,
            result: result.clone(),
        });
        Ok(cmd.with_outcome(result))
    }

    pub fn records(&self) -> Result<&[Record]> {
        Ok(&self.loaded()?.records)
    }

    pub fn index(&self) -> Result<&TraitIndex> {
        Ok(&self.loaded()?.index)
    }

    pub fn selection(&self) -> Result<&SelectionState> {
        Ok(&self.loaded()?.selection)
    }

    /// The filtered result as of the last load, toggle, or reset.
    pub fn result(&self) -> Result<&FilterOutcome> {
        Ok(&self.loaded()?.result)
    }

    pub fn toggle(&mut self, trait_type: &str, value: &str) -> Result<commands::CmdResult> {
        let options = &self.options;
        let loaded = match &mut self.phase {
            Phase::Ready(loaded) => loaded,
            Phase::Unloaded => return Err(TraitzError::NotReady),
        };

        let cmd = commands::toggle::run(
            &loaded.records,
            &mut loaded.selection,
            trait_type,
            value,
            options,
        )?;
        if let Some(outcome) = &cmd.outcome {
            loaded.result = outcome.clone();
        }
        Ok(cmd)
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        let loaded = self.loaded_mut()?;
        let cmd = commands::reset::run(&mut loaded.selection);
        if let Some(outcome) = &cmd.outcome {
            loaded.result = outcome.clone();
        }
        Ok(cmd)
    }

    pub fn facets(&self) -> Result<commands::CmdResult> {
        let loaded = self.loaded()?;
        Ok(commands::facets::run(
            &loaded.records,
            &loaded.index,
            &loaded.selection,
        ))
    }

    fn loaded(&self) -> Result<&Loaded> {
        match &self.phase {
            Phase::Ready(loaded) => Ok(loaded),
            Phase::Unloaded => Err(TraitzError::NotReady),
        }
    }

    fn loaded_mut(&mut self) -> Result<&mut Loaded> {
        match &mut self.phase {
            Phase::Ready(loaded) => Ok(loaded),
            Phase::Unloaded => Err(TraitzError::NotReady),
        }
    }
}

/// Runs the offline join utility. Needs no session.
pub fn join(dir: &Path, count: usize, output: &Path) -> Result<commands::CmdResult> {
    commands::join::run(dir, count, output)
}

pub fn config(config_dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(config_dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::facets::{Facet, FacetValue};
pub use crate::commands::filter::NoMatchPolicy;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
