//! Seeded synthetic data generator
//!
//! Produces a dataset of simulated posts with uniform category choice and
//! uniform engagement counts within fixed bounds. The seed is an explicit
//! parameter, never ambient RNG state, so a run is reproducible from its
//! recorded metadata alone.

use crate::dataset::{Category, Dataset, DatasetMetadata, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound (inclusive) for generated likes
pub const LIKES_MAX: u32 = 500;
/// Upper bound (inclusive) for generated shares
pub const SHARES_MAX: u32 = 100;
/// Upper bound (inclusive) for generated comments
pub const COMMENTS_MAX: u32 = 50;

/// Generate `n` records drawn uniformly from `categories`
///
/// Deterministic for a fixed seed. An empty category slice yields an
/// empty dataset.
pub fn generate(n: usize, categories: &[Category], seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(n);

    if !categories.is_empty() {
        for _ in 0..n {
            let category = categories[rng.gen_range(0..categories.len())];
            records.push(Record::new(
                category,
                rng.gen_range(0..=LIKES_MAX),
                rng.gen_range(0..=SHARES_MAX),
                rng.gen_range(0..=COMMENTS_MAX),
            ));
        }
    }

    Dataset::from_records(records).with_metadata(DatasetMetadata {
        seed: Some(seed),
        generated_at: Some(chrono::Utc::now()),
    })
}
