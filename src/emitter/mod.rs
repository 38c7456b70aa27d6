//! Emitter - tells in-process listeners what changed in the catalog.
//!
//! Changes are recorded while a session applies them and flushed once the new
//! catalog is in place, so a listener never sees a half-applied submit.
//! Payloads are JSON; `MovieAdded` carries the appended record.
//!
//! ## Example
//!
//! ```ignore
//! use movie_catalog::{CatalogEmitter, MOVIE_ADDED};
//!
//! let mut emitter = CatalogEmitter::new();
//! emitter.on(MOVIE_ADDED, |json| println!("added: {}", json));
//! emitter.record_added(&record);
//! emitter.flush();
//! ```

use event_emitter_rs::EventEmitter;

use crate::record::MovieRecord;

/// Event name emitted after a record is appended.
pub const MOVIE_ADDED: &str = "MovieAdded";

/// A catalog change waiting to be announced.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogEvent {
    MovieAdded(MovieRecord),
}

impl CatalogEvent {
    /// Event name listeners subscribe to.
    pub fn name(&self) -> &'static str {
        match self {
            CatalogEvent::MovieAdded(_) => MOVIE_ADDED,
        }
    }

    /// JSON payload handed to listeners.
    pub fn payload(&self) -> Result<String, serde_json::Error> {
        match self {
            CatalogEvent::MovieAdded(record) => serde_json::to_string(record),
        }
    }
}

/// Queues catalog events and fans them out to registered listeners.
pub struct CatalogEmitter {
    event_emitter: EventEmitter,
    pending: Vec<CatalogEvent>,
}

impl std::fmt::Debug for CatalogEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEmitter")
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Default for CatalogEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogEmitter {
    /// Create an emitter with no listeners and nothing pending.
    pub fn new() -> Self {
        Self {
            event_emitter: EventEmitter::new(),
            pending: Vec::new(),
        }
    }

    /// Register a listener for an event name; it receives the JSON payload.
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event, listener);
    }

    /// Note that `record` was appended. Announced by the next `flush`.
    pub fn record_added(&mut self, record: &MovieRecord) {
        self.pending.push(CatalogEvent::MovieAdded(record.clone()));
    }

    /// Events recorded but not yet flushed.
    pub fn pending(&self) -> &[CatalogEvent] {
        &self.pending
    }

    /// Emit every pending event, returning how many reached the emitter.
    ///
    /// An event whose payload fails to encode is logged and dropped.
    pub fn flush(&mut self) -> usize {
        let mut emitted = 0;
        for event in std::mem::take(&mut self.pending) {
            match event.payload() {
                Ok(json) => {
                    self.event_emitter.emit(event.name(), json);
                    emitted += 1;
                }
                Err(err) => {
                    tracing::warn!(event = event.name(), error = %err, "failed to encode catalog event")
                }
            }
        }
        emitted
    }
}
