//! In-memory movie catalog: an append-only record store, title and rating
//! filtering, and a validated add-movie form.
//!
//! The three pieces are plain functions and structs so they can be driven
//! and tested without any rendering layer:
//!
//! - [`Catalog`] holds records in insertion order and assigns ids.
//! - [`filter`] derives the visible subset from a [`FilterCriteria`].
//! - [`validate`] checks a [`MovieDraft`] before it may be added.
//!
//! [`CatalogSession`] wires them together the way a UI would.

extern crate self as movie_catalog;

mod catalog;
mod config;
#[cfg(feature = "emitter")]
mod emitter;
mod error;
mod filter;
mod form;
mod record;
mod session;
mod validation;
pub mod view;

pub use catalog::{next_id, seed_records, Catalog};
pub use config::CatalogConfig;
#[cfg(feature = "emitter")]
pub use emitter::{CatalogEmitter, CatalogEvent, MOVIE_ADDED};
pub use error::{CatalogError, SubmitError};
pub use filter::{filter, FilterCriteria};
pub use form::{MovieForm, SubmissionState};
pub use record::{
    MovieDraft, MovieRecord, Record, DEFAULT_DRAFT_RATING, MAX_RATING, MIN_RATING,
};
pub use session::CatalogSession;
pub use validation::{validate, Field, FieldError, ValidationReport};

// Derive macro for `Record`, living in the macro namespace next to the trait.
pub use movie_catalog_macros::Record;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
