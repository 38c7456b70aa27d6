//! Catalog configuration, loaded from JSON.
//!
//! ```json
//! { "submit_delay_ms": 500, "seed": [ { "id": 1, "title": "...", ... } ] }
//! ```
//!
//! Every key is optional. Without `seed` the built-in seed set is used.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{seed_records, Catalog};
use crate::error::CatalogError;
use crate::record::MovieRecord;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Artificial pause between accepting a draft and appending it.
    pub submit_delay_ms: u64,
    /// Records to start with instead of the built-in seed.
    pub seed: Option<Vec<MovieRecord>>,
}

impl CatalogConfig {
    /// Parse a config from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "loaded catalog config");
        Ok(config)
    }

    /// Set the submit delay, saturating at `u64::MAX` milliseconds.
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// The submit delay as a `Duration`; zero means no pause.
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Initial catalog: the configured seed, or the built-in one.
    ///
    /// A configured seed is held to the same rules as submitted drafts.
    pub fn initial_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.seed {
            Some(records) => Catalog::from_records(records.clone()),
            None => Catalog::from_records(seed_records()),
        }
    }
}
