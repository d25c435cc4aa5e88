//! Pulse: Engagement Analytics Engine
//!
//! An in-memory analytics engine for synthetic social-media engagement
//! data. A seeded generator produces a fixed-schema dataset; pure,
//! one-shot analysis passes derive the engagement metric, aggregate by
//! category, correlate the numeric fields, and summarize distributions.
//!
//! # Core Concepts
//!
//! - **Dataset**: an ordered store of fixed-schema records
//! - **Fields**: a closed enum of numeric columns, no string-keyed lookup
//! - **Pipeline**: generate → describe → correlate → aggregate → derive
//!
//! # Example
//!
//! ```
//! use pulse::pipeline::{run, RunOptions};
//!
//! let report = run(&RunOptions::new().with_records(100).with_seed(42)).unwrap();
//! assert_eq!(report.record_count, 100);
//! ```

pub mod analysis;
pub mod dataset;
pub mod generate;
pub mod pipeline;
pub mod report;

pub use analysis::{
    aggregate, correlate, derive_engagement, group_by, mean_for, null_counts, summarize,
    AnalysisError, AnalysisResult, CorrelationMatrix, DescribeStats,
};
pub use dataset::{Category, Dataset, DatasetMetadata, Field, Record};
pub use pipeline::{AnalysisReport, RunOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
