//! One-shot analysis run
//!
//! Mirrors the exploratory flow end to end: generate, inspect the first
//! rows, describe, count nulls, correlate the base fields, aggregate
//! likes, derive engagement, aggregate engagement. Single-threaded and
//! deterministic for a fixed seed.

use crate::analysis::{
    aggregate, correlate, derive_engagement, null_counts, summarize, AnalysisResult,
    CorrelationMatrix, DescribeStats,
};
use crate::dataset::{Category, Field, Record};
use crate::generate::generate;
use serde::{Deserialize, Serialize};

/// Number of rows shown in the report preview
const HEAD_ROWS: usize = 5;

/// Options for a pipeline run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Number of records to generate
    pub records: usize,
    /// Generator seed
    pub seed: u64,
    /// Categories to draw from
    pub categories: Vec<Category>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            records: 1000,
            seed: 42,
            categories: Category::ALL.to_vec(),
        }
    }
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, records: usize) -> Self {
        self.records = records;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }
}

/// Everything one pipeline run produces
///
/// `describe` runs before derivation, so it covers the base fields only;
/// the engagement column shows up in `null_counts` (as all-null) and in
/// the two aggregation listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub seed: u64,
    pub record_count: usize,
    pub head: Vec<Record>,
    pub describe: Vec<(Field, DescribeStats)>,
    pub null_counts: Vec<(Field, usize)>,
    pub correlation: CorrelationMatrix,
    pub likes_by_category: Vec<(Category, f64)>,
    pub engagement_by_category: Vec<(Category, f64)>,
}

/// Run the full pipeline
///
/// The two aggregations are independent calls: likes is aggregated over
/// the raw store, engagement only after the in-place derivation makes
/// the field available.
pub fn run(options: &RunOptions) -> AnalysisResult<AnalysisReport> {
    tracing::info!(records = options.records, seed = options.seed, "generating dataset");
    let mut dataset = generate(options.records, &options.categories, options.seed);

    let head = dataset.head(HEAD_ROWS).to_vec();
    let describe = summarize(&dataset)?;
    let nulls = null_counts(&dataset);

    tracing::debug!("computing correlation over base fields");
    let correlation = correlate(&dataset, &Field::BASE)?;

    let likes_by_category = aggregate(&dataset, Field::Likes)?;

    derive_engagement(&mut dataset);
    let engagement_by_category = aggregate(&dataset, Field::Engagement)?;

    tracing::info!(
        categories = likes_by_category.len(),
        "analysis complete"
    );

    Ok(AnalysisReport {
        seed: options.seed,
        record_count: dataset.len(),
        head,
        describe,
        null_counts: nulls,
        correlation,
        likes_by_category,
        engagement_by_category,
    })
}
