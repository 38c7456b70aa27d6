//! Validation - decides whether a draft may enter the catalog.
//!
//! Every rule runs on every call; a report lists all failing fields at once.
//!
//! | Field         | Rule                                      | Error                   |
//! |---------------|-------------------------------------------|-------------------------|
//! | `title`       | non-empty after trimming                  | `Required`              |
//! | `description` | non-empty after trimming                  | `Required`              |
//! | `posterURL`   | non-empty after trimming, absolute URL    | `Required` / `Invalid`  |
//! | `rating`      | finite, within `[0, 5]`                   | `OutOfRange`            |

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::record::{MovieDraft, MAX_RATING, MIN_RATING};

/// Draft fields a validation error can attach to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "description")]
    Description,
    #[serde(rename = "posterURL")]
    PosterUrl,
    #[serde(rename = "rating")]
    Rating,
}

impl Field {
    /// Form field name as the display layer knows it.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::PosterUrl => "posterURL",
            Field::Rating => "rating",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Description => "Description",
            Field::PosterUrl => "Poster URL",
            Field::Rating => "Rating",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a field was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    /// Empty after trimming.
    Required,
    /// Present but not a well-formed absolute URL.
    Invalid,
    /// Rating outside `[0, 5]`.
    OutOfRange,
}

impl FieldError {
    /// Human-readable message for this error on `field`.
    pub fn message(self, field: Field) -> String {
        match self {
            FieldError::Required => format!("{} is required", field.label()),
            FieldError::Invalid => "Please enter a valid URL".to_string(),
            FieldError::OutOfRange => format!(
                "{} must be between {} and {}",
                field.label(),
                MIN_RATING,
                MAX_RATING
            ),
        }
    }
}

/// Field-keyed validation outcome. Valid iff empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Human-readable message for `field`, if it has an error.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|error| error.message(field))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Drop the error for `field`; returns whether one was present.
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }
}

/// Check every field of `draft`.
pub fn validate(draft: &MovieDraft) -> ValidationReport {
    let mut report = ValidationReport::new();

    if let Some(error) = check_required(&draft.title) {
        report.insert(Field::Title, error);
    }
    if let Some(error) = check_required(&draft.description) {
        report.insert(Field::Description, error);
    }
    if let Some(error) = check_poster_url(&draft.poster_url) {
        report.insert(Field::PosterUrl, error);
    }
    if let Some(error) = check_rating(draft.rating) {
        report.insert(Field::Rating, error);
    }

    report
}

fn check_required(value: &str) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::Required)
}

fn check_poster_url(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::Required);
    }
    // Url::parse rejects relative references, so success means absolute.
    Url::parse(value).is_err().then_some(FieldError::Invalid)
}

fn check_rating(rating: f64) -> Option<FieldError> {
    (!(MIN_RATING..=MAX_RATING).contains(&rating)).then_some(FieldError::OutOfRange)
}
