//! Descriptive statistics

use super::{AnalysisError, AnalysisResult};
use crate::dataset::{Dataset, Field};
use serde::{Deserialize, Serialize};

/// Per-field descriptive statistics
///
/// `std` uses the sample (n-1) convention; with a single observation it
/// is NaN rather than zero. Quartiles use linear interpolation between
/// the closest order statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

/// Quantile by linear interpolation over a sorted sample
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

fn describe_values(values: &[f64]) -> DescribeStats {
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let std = if n > 1 {
        let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
        (ss / (n - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    DescribeStats {
        count: n,
        mean,
        std,
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        q50: quantile(&sorted, 0.50),
        q75: quantile(&sorted, 0.75),
        max: sorted[n - 1],
    }
}

/// Descriptive statistics for every available field
///
/// Base fields always appear; `Engagement` appears only once derived.
/// Fields are reported in `Field::ALL` order.
pub fn summarize(dataset: &Dataset) -> AnalysisResult<Vec<(Field, DescribeStats)>> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    Ok(Field::ALL
        .into_iter()
        .filter(|&field| dataset.has_field(field))
        .map(|field| {
            let values: Vec<f64> = dataset
                .records()
                .iter()
                .filter_map(|r| r.value(field).map(f64::from))
                .collect();
            (field, describe_values(&values))
        })
        .collect())
}

/// Count of absent values per field
///
/// Base fields are always zero; `Engagement` counts records where the
/// derived total has not been computed. The contract supports absent
/// values generally so the summarizer stays reusable beyond this schema.
pub fn null_counts(dataset: &Dataset) -> Vec<(Field, usize)> {
    Field::ALL
        .into_iter()
        .map(|field| {
            let nulls = dataset
                .records()
                .iter()
                .filter(|r| r.value(field).is_none())
                .count();
            (field, nulls)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::derive_engagement;
    use crate::dataset::{Category, Record};
    use crate::generate::generate;

    fn likes_dataset(likes: &[u32]) -> Dataset {
        Dataset::from_records(
            likes
                .iter()
                .map(|&l| Record::new(Category::Tech, l, 0, 0))
                .collect(),
        )
    }

    #[test]
    fn test_count_equals_record_count_for_every_field() {
        let ds = generate(250, &Category::ALL, 42);
        for (_, stats) in summarize(&ds).unwrap() {
            assert_eq!(stats.count, 250);
        }
    }

    #[test]
    fn test_known_sample_statistics() {
        let ds = likes_dataset(&[10, 20, 30, 40, 50]);
        let summary = summarize(&ds).unwrap();
        let (field, stats) = &summary[0];
        assert_eq!(*field, Field::Likes);
        assert_eq!(stats.mean, 30.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 50.0);
        assert_eq!(stats.q25, 20.0);
        assert_eq!(stats.q50, 30.0);
        assert_eq!(stats.q75, 40.0);
        // Sample std of 10..50 step 10 is sqrt(1000/4).
        assert!((stats.std - 250.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_interpolates_between_ranks() {
        let ds = likes_dataset(&[0, 10, 20, 30]);
        let summary = summarize(&ds).unwrap();
        let stats = &summary[0].1;
        assert_eq!(stats.q25, 7.5);
        assert_eq!(stats.q50, 15.0);
        assert_eq!(stats.q75, 22.5);
    }

    #[test]
    fn test_single_record_std_is_nan() {
        let ds = likes_dataset(&[42]);
        let stats = &summarize(&ds).unwrap()[0].1;
        assert_eq!(stats.count, 1);
        assert!(stats.std.is_nan());
        assert_eq!(stats.min, stats.max);
    }

    #[test]
    fn test_engagement_excluded_until_derived() {
        let mut ds = generate(20, &Category::ALL, 42);
        let before: Vec<Field> = summarize(&ds).unwrap().into_iter().map(|(f, _)| f).collect();
        assert_eq!(before, Field::BASE.to_vec());

        derive_engagement(&mut ds);
        let after = summarize(&ds).unwrap();
        assert_eq!(after.len(), 4);
        assert_eq!(after[3].0, Field::Engagement);
    }

    #[test]
    fn test_null_counts() {
        let mut ds = generate(30, &Category::ALL, 42);
        let before = null_counts(&ds);
        assert_eq!(before[0], (Field::Likes, 0));
        assert_eq!(before[3], (Field::Engagement, 30));

        derive_engagement(&mut ds);
        for (_, nulls) in null_counts(&ds) {
            assert_eq!(nulls, 0);
        }
    }

    #[test]
    fn test_summarize_empty_dataset_fails() {
        let ds = Dataset::from_records(Vec::new());
        assert!(matches!(summarize(&ds), Err(AnalysisError::EmptyDataset)));
    }
}
