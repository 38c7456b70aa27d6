//! Session - wires the catalog, the filter criteria and the add-movie form.
//!
//! The session owns the current catalog and re-derives the visible list
//! synchronously whenever the catalog or either criterion changes. The
//! display layer reads `visible()`, `form()` and `criteria()`.
//!
//! ## Example
//!
//! ```ignore
//! use movie_catalog::{CatalogSession, Field};
//!
//! let mut session = CatalogSession::seeded();
//! session.set_min_rating(Some(4.8));
//! assert_eq!(session.visible().len(), 2);
//!
//! session.update_field(Field::Title, "Dune");
//! // ...fill the rest...
//! session.submit()?;
//! let added = session.catalog().last();
//! ```

use std::thread;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
#[cfg(feature = "emitter")]
use crate::emitter::CatalogEmitter;
use crate::error::{CatalogError, SubmitError};
use crate::filter::{filter, FilterCriteria};
use crate::form::MovieForm;
use crate::record::{MovieRecord, Record};
use crate::validation::Field;

/// The state a catalog screen holds between input events.
///
/// Every mutator re-derives `visible()` before returning, so readers never
/// see a list that lags behind the catalog or the criteria.
#[derive(Debug)]
pub struct CatalogSession {
    catalog: Catalog,
    criteria: FilterCriteria,
    visible: Vec<MovieRecord>,
    form: MovieForm,
    submit_delay: Duration,
    #[cfg(feature = "emitter")]
    emitter: CatalogEmitter,
}

impl CatalogSession {
    /// Session over the built-in seed with no submit delay.
    pub fn seeded() -> Self {
        Self::with_catalog(Catalog::seeded())
    }

    /// Session over the configured seed, using the configured submit delay.
    ///
    /// Fails when the configured seed breaks the record rules.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut session = Self::with_catalog(config.initial_catalog()?);
        session.submit_delay = config.submit_delay();
        Ok(session)
    }

    /// Session over an existing catalog, with no filters and a blank form.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut session = Self {
            catalog,
            criteria: FilterCriteria::new(),
            visible: Vec::new(),
            form: MovieForm::new(),
            submit_delay: Duration::ZERO,
            #[cfg(feature = "emitter")]
            emitter: CatalogEmitter::new(),
        };
        session.refresh();
        session
    }

    /// The current catalog, including every accepted submission.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The filtered records, in catalog order.
    pub fn visible(&self) -> &[MovieRecord] {
        &self.visible
    }

    /// The add-movie form: draft, pending errors and submission state.
    pub fn form(&self) -> &MovieForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MovieForm {
        &mut self.form
    }

    /// Whether a "clear all filters" affordance has anything to clear.
    pub fn has_active_filters(&self) -> bool {
        self.criteria.is_active()
    }

    pub fn set_title_filter(&mut self, title: impl Into<String>) {
        self.criteria.set_title(title);
        self.refresh();
    }

    pub fn clear_title_filter(&mut self) {
        self.set_title_filter(String::new());
    }

    pub fn set_min_rating(&mut self, min_rating: Option<f64>) {
        self.criteria.set_min_rating(min_rating);
        self.refresh();
    }

    /// Apply a rating slider position; its zero end means "any rating".
    pub fn set_rating_slider(&mut self, position: f64) {
        self.criteria.set_rating_slider(position);
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.refresh();
    }

    /// Forward raw input for one form field.
    pub fn update_field(&mut self, field: Field, value: &str) {
        self.form.set_field(field, value);
    }

    /// Register a listener for catalog events such as `MovieAdded`.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event, listener);
    }

    /// Submit the form's draft. The new record is `catalog().last()`.
    ///
    /// A rejected draft leaves the catalog and the form's values untouched;
    /// the errors are available through `form().errors()`. Whatever happens
    /// after validation, the form ends up `Idle` again.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        let draft = match self.form.begin_submit() {
            Ok(draft) => draft,
            Err(err) => {
                tracing::warn!(error = %err, "submission rejected");
                return Err(err);
            }
        };

        if !self.submit_delay.is_zero() {
            thread::sleep(self.submit_delay);
        }

        let catalog = match self.catalog.add_record(draft) {
            Ok(catalog) => catalog,
            Err(err) => {
                self.form.abort_submit();
                tracing::warn!(error = %err, "accepted draft could not be added");
                return Err(err.into());
            }
        };
        self.catalog = catalog;
        self.form.finish_submit();
        self.refresh();

        if let Some(added) = self.catalog.last() {
            tracing::info!(
                collection = MovieRecord::COLLECTION,
                id = added.id(),
                total = self.catalog.len(),
                "movie added"
            );

            #[cfg(feature = "emitter")]
            {
                self.emitter.record_added(added);
                self.emitter.flush();
            }
        }

        Ok(())
    }

    fn refresh(&mut self) {
        self.visible = filter(self.catalog.records(), &self.criteria);
        tracing::debug!(
            title = self.criteria.title(),
            min_rating = ?self.criteria.min_rating(),
            visible = self.visible.len(),
            total = self.catalog.len(),
            "visible movies re-derived"
        );
    }
}
