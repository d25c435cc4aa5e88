//! Pairwise Pearson correlation

use super::{AnalysisError, AnalysisResult};
use crate::dataset::{Dataset, Field};
use serde::{Deserialize, Serialize};

/// Labeled correlation matrix over a set of numeric fields
///
/// Symmetric by construction: only the upper triangle is computed and
/// the lower triangle mirrors it, so redundant floating-point work can
/// never introduce asymmetry. Diagonal entries are exactly `1.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub fields: Vec<Field>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlation between two fields, if both are in the matrix
    pub fn get(&self, a: Field, b: Field) -> Option<f64> {
        let i = self.fields.iter().position(|f| *f == a)?;
        let j = self.fields.iter().position(|f| *f == b)?;
        Some(self.values[i][j])
    }

    /// Matrix dimensions (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (
            self.values.len(),
            self.values.first().map(|row| row.len()).unwrap_or(0),
        )
    }
}

/// Pearson product-moment coefficient of two equal-length samples
///
/// Returns NaN when either sample has zero variance: the coefficient is
/// undefined there and a sentinel number would misreport it.
fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    cov / denom
}

/// Pairwise Pearson correlation over `fields`
///
/// Zero-variance policy: a constant field correlates as NaN with every
/// other field (the coefficient is undefined); its diagonal entry is
/// still exactly `1.0`. Fails if the dataset is empty or any requested
/// field is not yet available on every record.
pub fn correlate(dataset: &Dataset, fields: &[Field]) -> AnalysisResult<CorrelationMatrix> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    for &field in fields {
        if !dataset.has_field(field) {
            return Err(AnalysisError::FieldUnavailable(field));
        }
    }

    let columns: Vec<Vec<f64>> = fields
        .iter()
        .map(|&field| {
            dataset
                .records()
                .iter()
                .filter_map(|r| r.value(field).map(f64::from))
                .collect()
        })
        .collect();

    let n = fields.len();
    let mut values = vec![vec![0.0; n]; n];
    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = pearson(&columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        fields: fields.to_vec(),
        values,
    })
}
