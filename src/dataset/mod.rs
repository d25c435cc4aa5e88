//! Core dataset structures

mod record;
mod store;

pub use record::{Category, Field, Record, UnknownCategory, UnknownField};
pub use store::{Dataset, DatasetMetadata};
