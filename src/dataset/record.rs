//! Record representation for engagement data
//!
//! A record is one observed post: a category label plus three raw
//! engagement counts. The engagement total is a derived field and is
//! absent until the metric deriver runs.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Content category of a post
///
/// The category set is closed: analysis code matches on it exhaustively
/// and the generator draws from it uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tech,
    Health,
    Sports,
    Politics,
    Entertainment,
}

impl Category {
    /// All categories, in canonical order
    pub const ALL: [Category; 5] = [
        Category::Tech,
        Category::Health,
        Category::Sports,
        Category::Politics,
        Category::Entertainment,
    ];

    /// Canonical label for display and parsing
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Health => "Health",
            Category::Sports => "Sports",
            Category::Politics => "Politics",
            Category::Entertainment => "Entertainment",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a string does not name a known category
#[derive(Debug, Clone, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Numeric field of a record
///
/// Replaces string-keyed column lookup: every numeric access goes through
/// this enum, so a misspelled field name is a parse error at the boundary
/// rather than a runtime lookup failure deep in a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Likes,
    Shares,
    Comments,
    /// Derived total, absent until `derive_engagement` runs
    Engagement,
}

impl Field {
    /// All fields, base fields first
    pub const ALL: [Field; 4] = [Field::Likes, Field::Shares, Field::Comments, Field::Engagement];

    /// The three raw fields present on every record from creation
    pub const BASE: [Field; 3] = [Field::Likes, Field::Shares, Field::Comments];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Likes => "likes",
            Field::Shares => "shares",
            Field::Comments => "comments",
            Field::Engagement => "engagement",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a string does not name a known field
#[derive(Debug, Clone, Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// One observed post
///
/// Base fields are immutable once created. `engagement` is the single
/// derived-field addition allowed by the data model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub category: Category,
    pub likes: u32,
    pub shares: u32,
    pub comments: u32,
    /// Derived total; `None` until the metric deriver runs
    pub engagement: Option<u32>,
}

impl Record {
    /// Create a record from its three base fields
    pub fn new(category: Category, likes: u32, shares: u32, comments: u32) -> Self {
        Self {
            category,
            likes,
            shares,
            comments,
            engagement: None,
        }
    }

    /// Enumerated field accessor
    ///
    /// Returns `None` only for `Field::Engagement` before derivation.
    pub fn value(&self, field: Field) -> Option<u32> {
        match field {
            Field::Likes => Some(self.likes),
            Field::Shares => Some(self.shares),
            Field::Comments => Some(self.comments),
            Field::Engagement => self.engagement,
        }
    }
}
