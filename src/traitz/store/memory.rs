use super::{LoadOutcome, RecordSource};
use crate::error::{Result, TraitzError};
use crate::model::Record;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
enum Slot {
    Record(Record),
    Malformed,
}

/// In-memory numbered source for testing and development.
///
/// Slots are addressed `1..=count` like the numbered file layout; unfilled slots
/// behave as missing resources.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    slots: BTreeMap<usize, Slot>,
    count: usize,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source with records in slots `1..=records.len()`.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut source = Self::new();
        for record in records {
            source.push(record);
        }
        source
    }

    /// Append a record to the next slot.
    pub fn push(&mut self, record: Record) {
        self.count += 1;
        self.slots.insert(self.count, Slot::Record(record));
    }

    /// Reserve the next slot without filling it.
    pub fn push_missing(&mut self) {
        self.count += 1;
    }

    /// Fill the next slot with an unreadable payload.
    pub fn push_malformed(&mut self) {
        self.count += 1;
        self.slots.insert(self.count, Slot::Malformed);
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl RecordSource for InMemorySource {
    fn load_all(&self) -> Result<LoadOutcome> {
        let mut outcome = LoadOutcome::default();

        for index in 1..=self.count {
            match self.slots.get(&index) {
                Some(Slot::Record(record)) => outcome.records.push(record.clone()),
                Some(Slot::Malformed) => {
                    return Err(TraitzError::load_failure(
                        format!("memory:{}", index),
                        "malformed record",
                    ))
                }
                None => {
                    tracing::warn!("Record {} does not exist.", index);
                    outcome.missing.push(index);
                }
            }
        }

        Ok(outcome)
    }

    fn describe(&self) -> String {
        format!("memory (1..={})", self.count)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// The two-record collection used throughout the filter tests.
    pub fn red_blue() -> Vec<Record> {
        vec![
            Record::new("A", "").with_attribute("Color", "Red"),
            Record::new("B", "").with_attribute("Color", "Blue"),
        ]
    }

    /// A small collection with several trait types and overlapping values.
    pub fn creatures() -> Vec<Record> {
        vec![
            Record::new("Ant", "tiny")
                .with_attribute("Color", "Red")
                .with_attribute("Legs", "6")
                .with_attribute("Habitat", "Land"),
            Record::new("Crab", "sideways")
                .with_attribute("Color", "Red")
                .with_attribute("Legs", "10")
                .with_attribute("Habitat", "Sea"),
            Record::new("Frog", "green")
                .with_attribute("Color", "Green")
                .with_attribute("Legs", "4")
                .with_attribute("Habitat", "Land")
                .with_attribute("Habitat", "Pond"),
            Record::new("Snail", "slow")
                .with_attribute("Color", "Brown")
                .with_attribute("Legs", "")
                .with_attribute("Habitat", "Land"),
        ]
    }

    pub struct SourceFixture {
        pub source: InMemorySource,
    }

    impl Default for SourceFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SourceFixture {
        pub fn new() -> Self {
            Self {
                source: InMemorySource::new(),
            }
        }

        pub fn with_numbered(mut self, count: usize) -> Self {
            for i in 0..count {
                let n = self.source.count() + 1;
                let record = Record::new(format!("Record {}", n), "")
                    .with_attribute("Batch", &format!("Batch{}", i % 3 + 1));
                self.source.push(record);
            }
            self
        }

        pub fn with_missing(mut self) -> Self {
            self.source.push_missing();
            self
        }

        pub fn with_malformed(mut self) -> Self {
            self.source.push_malformed();
            self
        }
    }
}
