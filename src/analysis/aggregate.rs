//! Group-by aggregation
//!
//! Partitioning and reduction are separate passes: `group_by` builds
//! ordered partitions over any key, and the mean reduction runs over the
//! partitions it returns. Keys exist by presence — a partition is never
//! empty unless a caller asks for a key no record carries.

use super::{AnalysisError, AnalysisResult};
use crate::dataset::{Category, Dataset, Field, Record};
use std::collections::HashMap;

/// Partition records by an arbitrary key
///
/// Partitions appear in first-occurrence order of their key; records
/// within a partition keep insertion order.
pub fn group_by<'a, K, F>(records: &'a [Record], key_fn: F) -> Vec<(K, Vec<&'a Record>)>
where
    K: Eq + std::hash::Hash + Clone,
    F: Fn(&Record) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut partitions: Vec<(K, Vec<&'a Record>)> = Vec::new();

    for record in records {
        let key = key_fn(record);
        match index.get(&key) {
            Some(&i) => partitions[i].1.push(record),
            None => {
                index.insert(key.clone(), partitions.len());
                partitions.push((key, vec![record]));
            }
        }
    }

    partitions
}

fn field_values(records: &[&Record], field: Field) -> AnalysisResult<Vec<f64>> {
    records
        .iter()
        .map(|r| {
            r.value(field)
                .map(f64::from)
                .ok_or(AnalysisError::FieldUnavailable(field))
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Per-category mean of `field`, sorted by mean descending
///
/// The sort is stable, so categories with equal means keep their
/// first-occurrence order. Fails if the dataset is empty or `field` is
/// not yet available on every record.
pub fn aggregate(dataset: &Dataset, field: Field) -> AnalysisResult<Vec<(Category, f64)>> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    if !dataset.has_field(field) {
        return Err(AnalysisError::FieldUnavailable(field));
    }

    let mut means: Vec<(Category, f64)> = group_by(dataset.records(), |r| r.category)
        .into_iter()
        .map(|(category, records)| {
            // Infallible here: availability was checked over the whole store.
            let values: Vec<f64> = records
                .iter()
                .filter_map(|r| r.value(field).map(f64::from))
                .collect();
            (category, mean(&values))
        })
        .collect();

    // Values are finite (integer-valued), so the comparison never sees NaN.
    means.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    Ok(means)
}

/// Mean of `field` over the records in one category
///
/// Unlike [`aggregate`], the key comes from the caller rather than from
/// presence in the data, so an absent key is an error.
pub fn mean_for(dataset: &Dataset, category: Category, field: Field) -> AnalysisResult<f64> {
    if !dataset.has_field(field) {
        return Err(AnalysisError::FieldUnavailable(field));
    }

    let records: Vec<&Record> = dataset
        .records()
        .iter()
        .filter(|r| r.category == category)
        .collect();
    if records.is_empty() {
        return Err(AnalysisError::EmptyPartition(category));
    }

    Ok(mean(&field_values(&records, field)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::derive_engagement;
    use crate::generate::generate;

    fn tech_only() -> Dataset {
        Dataset::from_records(
            [10, 20, 30, 40, 50]
                .into_iter()
                .map(|likes| Record::new(Category::Tech, likes, 0, 0))
                .collect(),
        )
    }

    #[test]
    fn test_group_by_first_occurrence_order() {
        let records = vec![
            Record::new(Category::Sports, 1, 0, 0),
            Record::new(Category::Tech, 2, 0, 0),
            Record::new(Category::Sports, 3, 0, 0),
        ];
        let partitions = group_by(&records, |r| r.category);
        assert_eq!(partitions.len(), 2);
        assert_eq!(partitions[0].0, Category::Sports);
        assert_eq!(partitions[0].1.len(), 2);
        assert_eq!(partitions[1].0, Category::Tech);
    }

    #[test]
    fn test_aggregate_single_category_mean() {
        let ds = tech_only();
        let means = aggregate(&ds, Field::Likes).unwrap();
        assert_eq!(means, vec![(Category::Tech, 30.0)]);
    }

    #[test]
    fn test_aggregate_engagement_matches_likes_when_rest_zero() {
        let mut ds = tech_only();
        derive_engagement(&mut ds);
        let means = aggregate(&ds, Field::Engagement).unwrap();
        assert_eq!(means, vec![(Category::Tech, 30.0)]);
    }

    #[test]
    fn test_aggregate_sorted_descending() {
        let ds = generate(1000, &Category::ALL, 42);
        let means = aggregate(&ds, Field::Likes).unwrap();
        for pair in means.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_weighted_mean_identity() {
        let ds = generate(1000, &Category::ALL, 42);
        let means = aggregate(&ds, Field::Likes).unwrap();

        let partitions = group_by(ds.records(), |r| r.category);
        let sizes: HashMap<Category, usize> =
            partitions.iter().map(|(c, rs)| (*c, rs.len())).collect();

        let weighted: f64 = means
            .iter()
            .map(|(c, m)| m * sizes[c] as f64)
            .sum::<f64>()
            / ds.len() as f64;
        let overall = ds
            .records()
            .iter()
            .map(|r| f64::from(r.likes))
            .sum::<f64>()
            / ds.len() as f64;

        assert!((weighted - overall).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_engagement_before_derivation_fails() {
        let ds = tech_only();
        let err = aggregate(&ds, Field::Engagement).unwrap_err();
        assert!(matches!(err, AnalysisError::FieldUnavailable(Field::Engagement)));
    }

    #[test]
    fn test_aggregate_empty_dataset_fails() {
        let ds = Dataset::from_records(Vec::new());
        assert!(matches!(
            aggregate(&ds, Field::Likes),
            Err(AnalysisError::EmptyDataset)
        ));
    }

    #[test]
    fn test_mean_for_known_category() {
        let ds = tech_only();
        assert_eq!(mean_for(&ds, Category::Tech, Field::Likes).unwrap(), 30.0);
    }

    #[test]
    fn test_mean_for_absent_category_fails() {
        let ds = tech_only();
        let err = mean_for(&ds, Category::Politics, Field::Likes).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyPartition(Category::Politics)));
    }

    #[test]
    fn test_equal_means_keep_first_occurrence_order() {
        let ds = Dataset::from_records(vec![
            Record::new(Category::Health, 10, 0, 0),
            Record::new(Category::Tech, 10, 0, 0),
        ]);
        let means = aggregate(&ds, Field::Likes).unwrap();
        assert_eq!(means[0].0, Category::Health);
        assert_eq!(means[1].0, Category::Tech);
    }
}
