//! Filter - derives the visible subset of the catalog.
//!
//! Both criteria are conjunctive. The title criterion keeps records whose
//! title contains the query case-insensitively; the rating criterion keeps
//! records rated at or above the minimum. Survivors keep their catalog order.

use crate::record::MovieRecord;

/// The active filter parameters.
///
/// A minimum rating of exactly 0 means "any rating" and is stored as `None`,
/// so a record rated 0 stays visible until a minimum above 0 is chosen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    title: String,
    min_rating: Option<f64>,
}

impl FilterCriteria {
    /// Criteria that keep every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `set_title`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    /// Builder form of `set_min_rating`.
    pub fn with_min_rating(mut self, min_rating: Option<f64>) -> Self {
        self.set_min_rating(min_rating);
        self
    }

    /// The title query, untrimmed.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The active minimum, `None` meaning any rating.
    pub fn min_rating(&self) -> Option<f64> {
        self.min_rating
    }

    /// Replace the title query. An empty query keeps every title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replace the minimum rating; `Some(0.0)` is stored as `None`.
    pub fn set_min_rating(&mut self, min_rating: Option<f64>) {
        self.min_rating = min_rating.filter(|rating| *rating != 0.0);
    }

    /// Apply a rating slider position; the slider's zero end reads "any".
    pub fn set_rating_slider(&mut self, position: f64) {
        self.set_min_rating(Some(position));
    }

    /// Drop both criteria.
    pub fn clear(&mut self) {
        self.title.clear();
        self.min_rating = None;
    }

    /// True when either criterion would drop records.
    pub fn is_active(&self) -> bool {
        !self.title.is_empty() || self.min_rating.is_some()
    }

    /// Whether a single record survives both criteria.
    pub fn matches(&self, record: &MovieRecord) -> bool {
        self.matches_title(record, &self.title.to_lowercase()) && self.matches_rating(record)
    }

    fn matches_title(&self, record: &MovieRecord, needle: &str) -> bool {
        needle.is_empty() || record.title.to_lowercase().contains(needle)
    }

    fn matches_rating(&self, record: &MovieRecord) -> bool {
        match self.min_rating {
            Some(min) => record.rating >= min,
            None => true,
        }
    }
}

/// Records from `records` matching `criteria`, in their original order.
pub fn filter(records: &[MovieRecord], criteria: &FilterCriteria) -> Vec<MovieRecord> {
    let needle = criteria.title.to_lowercase();
    records
        .iter()
        .filter(|record| criteria.matches_title(record, &needle))
        .filter(|record| criteria.matches_rating(record))
        .cloned()
        .collect()
}
