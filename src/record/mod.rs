//! Records - the movie entries held by the catalog.
//!
//! A `MovieDraft` is what the user types into the form. Once it passes
//! validation the catalog turns it into a `MovieRecord` by assigning an id.
//!
//! ## Example
//!
//! ```ignore
//! use movie_catalog::{MovieDraft, Record};
//!
//! let draft = MovieDraft::new("Dune", "Spice.", "https://example.com/p.jpg", 4.5);
//! let record = draft.into_record(4);
//! assert_eq!(record.id(), 4);
//! ```

use serde::{Deserialize, Serialize};

/// Lowest rating a record may carry.
pub const MIN_RATING: f64 = 0.0;

/// Highest rating a record may carry.
pub const MAX_RATING: f64 = 5.0;

/// Rating pre-filled into a fresh draft.
pub const DEFAULT_DRAFT_RATING: f64 = 5.0;

/// Trait for types that can be kept in an append-only catalog.
pub trait Record: Clone {
    /// The collection name for this record type (e.g., "movies").
    const COLLECTION: &'static str;

    /// Returns the store-assigned identifier.
    fn id(&self) -> u64;
}

/// A movie held by the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, movie_catalog_macros::Record)]
#[record(collection = "movies")]
pub struct MovieRecord {
    #[record(id)]
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(rename = "posterURL")]
    pub poster_url: String,
    pub rating: f64,
}

/// User-entered movie fields prior to validation and id assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub description: String,
    #[serde(rename = "posterURL")]
    pub poster_url: String,
    pub rating: f64,
}

impl MovieDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        poster_url: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            poster_url: poster_url.into(),
            rating,
        }
    }

    /// Attach an id, copying every field verbatim.
    pub fn into_record(self, id: u64) -> MovieRecord {
        MovieRecord {
            id,
            title: self.title,
            description: self.description,
            poster_url: self.poster_url,
            rating: self.rating,
        }
    }
}

impl From<&MovieRecord> for MovieDraft {
    fn from(record: &MovieRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            poster_url: record.poster_url.clone(),
            rating: record.rating,
        }
    }
}

impl Default for MovieDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            poster_url: String::new(),
            rating: DEFAULT_DRAFT_RATING,
        }
    }
}
