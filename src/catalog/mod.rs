//! Catalog - the append-only, ordered collection of movie records.
//!
//! The catalog is copy-on-write: `add_record` leaves the receiver untouched and
//! returns the grown catalog, so a caller holding the previous value keeps
//! seeing exactly what it saw before.
//!
//! ## Example
//!
//! ```ignore
//! use movie_catalog::{Catalog, MovieDraft};
//!
//! let catalog = Catalog::seeded();
//! let grown = catalog.add_record(MovieDraft::new("Dune", "...", "https://example.com/p.jpg", 4.5))?;
//! assert_eq!(catalog.len(), 3);
//! assert_eq!(grown.len(), 4);
//! ```

mod seed;

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::record::{MovieDraft, MovieRecord, Record};
use crate::validation::validate;

pub use seed::seed_records;

/// Id the next record appended to `records` receives.
///
/// One past the largest existing id, or 1 for an empty collection. Ids are
/// never reused even if the largest record were ever removed. Returns `None`
/// once the largest id is `u64::MAX` and no fresh id is left.
pub fn next_id<R: Record>(records: &[R]) -> Option<u64> {
    match records.iter().map(R::id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Ordered movie collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    records: Vec<MovieRecord>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in seed set.
    pub fn seeded() -> Self {
        Self {
            records: seed_records(),
        }
    }

    /// Build a catalog from existing records.
    ///
    /// Every record must pass the same field rules a submitted draft does,
    /// and ids must be unique.
    pub fn from_records(records: Vec<MovieRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            let report = validate(&MovieDraft::from(record));
            if !report.is_valid() {
                return Err(CatalogError::InvalidRecord {
                    id: record.id(),
                    report,
                });
            }
            if !seen.insert(record.id()) {
                return Err(CatalogError::DuplicateId {
                    collection: MovieRecord::COLLECTION.to_string(),
                    id: record.id(),
                });
            }
        }
        Ok(Self { records })
    }

    /// Parse a JSON array of records (the seed data shape).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<MovieRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::Seed(e.to_string()))?;
        Self::from_records(records)
    }

    /// Return a new catalog with `draft` appended under the next id.
    ///
    /// The draft must already have passed validation. Fails only when the
    /// id space is used up.
    pub fn add_record(&self, draft: MovieDraft) -> Result<Catalog, CatalogError> {
        let id = next_id(&self.records).ok_or(CatalogError::IdsExhausted {
            collection: MovieRecord::COLLECTION.to_string(),
        })?;
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.extend_from_slice(&self.records);
        records.push(draft.into_record(id));
        tracing::debug!(collection = MovieRecord::COLLECTION, id, "record appended");
        Ok(Catalog { records })
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// The most recently appended record.
    pub fn last(&self) -> Option<&MovieRecord> {
        self.records.last()
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no record has been added or seeded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
