//! Tabular analysis pipeline
//!
//! Pure, one-shot transformations over an immutable dataset snapshot:
//!
//! - **Metric deriver**: adds the engagement total to every record
//! - **Aggregator**: group-by-category means, sorted descending
//! - **Correlation engine**: pairwise Pearson matrix over numeric fields
//! - **Descriptive summarizer**: per-field count/mean/std/min/quartiles/max
//!   and null counts
//!
//! The metric deriver is the only component that touches the dataset;
//! everything else reads a shared reference and returns a fresh derived
//! structure. Every failure is synchronous and fatal to the call that
//! raised it — there is no partial-failure mode.

mod aggregate;
mod correlate;
mod derive;
mod summary;

pub use aggregate::{aggregate, group_by, mean_for};
pub use correlate::{correlate, CorrelationMatrix};
pub use derive::derive_engagement;
pub use summary::{null_counts, summarize, DescribeStats};

use crate::dataset::{Category, Field, UnknownField};
use thiserror::Error;

/// Errors raised by the analysis components
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    /// The field is not present on every record (engagement requested
    /// before derivation)
    #[error("field not available on every record: {0}")]
    FieldUnavailable(Field),

    /// A string at the input boundary did not name a known field
    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    /// The requested group key matches zero records
    #[error("no records in partition: {0}")]
    EmptyPartition(Category),

    /// The dataset holds zero records
    #[error("dataset is empty")]
    EmptyDataset,
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
