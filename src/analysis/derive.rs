//! Engagement metric derivation

use crate::dataset::Dataset;

/// Set `engagement = likes + shares + comments` on every record
///
/// Exact integer sum of the three base fields, no rounding. This is the
/// single in-place mutation the data model allows; running it again
/// recomputes the same values, so it is idempotent. Infallible: base
/// fields are always present.
pub fn derive_engagement(dataset: &mut Dataset) {
    for record in dataset.records_mut() {
        record.engagement = Some(record.likes + record.shares + record.comments);
    }
}
