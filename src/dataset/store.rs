//! In-memory record store

use super::record::{Field, Record};
use serde::{Deserialize, Serialize};

/// Dataset metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Seed the generator was run with, if the dataset is synthetic
    pub seed: Option<u64>,
    /// When the dataset was generated
    pub generated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// An ordered collection of records
///
/// Order is insertion order; it carries no meaning for aggregation and
/// only matters for displaying the first few rows. Records are read-only
/// after creation except for the one in-place engagement derivation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
    pub metadata: DatasetMetadata,
}

impl Dataset {
    /// Create a dataset from records, with default metadata
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            metadata: DatasetMetadata::default(),
        }
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: DatasetMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read-only view of all records, in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// First `n` records (fewer if the dataset is smaller)
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    /// Whether every record carries a value for `field`
    ///
    /// Always true for base fields; true for `Engagement` only after
    /// derivation.
    pub fn has_field(&self, field: Field) -> bool {
        self.records.iter().all(|r| r.value(field).is_some())
    }

    /// Mutable access reserved for the metric deriver
    pub(crate) fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }
}
