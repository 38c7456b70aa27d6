//! Form - the add-movie draft and its submission state machine.
//!
//! Submission is two-phase: `begin_submit` validates and moves `Idle ->
//! Submitting`, handing back the draft to append; `finish_submit` resets the
//! form and returns to `Idle`. If the append itself fails, `abort_submit`
//! returns to `Idle` keeping the draft. A rejected draft never leaves `Idle`.

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::record::MovieDraft;
use crate::validation::{validate, Field, ValidationReport};

/// Where the form is in the submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Draft fields, pending errors, and submission state of the add-movie form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovieForm {
    draft: MovieDraft,
    errors: ValidationReport,
    state: SubmissionState,
}

impl MovieForm {
    /// Create an idle form holding the default draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values.
    pub fn draft(&self) -> &MovieDraft {
        &self.draft
    }

    /// Errors from the last rejected submission, minus fields edited since.
    pub fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// True while a submission is in flight; repeat submits are refused.
    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Replace one field from raw input.
    ///
    /// Rating input is parsed as a float; anything unparsable becomes NaN and
    /// is rejected at submit time. Editing a field clears its pending error.
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::Title => self.draft.title = value.to_string(),
            Field::Description => self.draft.description = value.to_string(),
            Field::PosterUrl => self.draft.poster_url = value.to_string(),
            Field::Rating => self.draft.rating = value.trim().parse().unwrap_or(f64::NAN),
        }
        self.errors.clear_field(field);
    }

    /// Validate and enter `Submitting`, returning the draft to append.
    ///
    /// On rejection the errors are stored on the form, the draft keeps its
    /// values and the state stays `Idle`.
    pub fn begin_submit(&mut self) -> Result<MovieDraft, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }

        let report = validate(&self.draft);
        if !report.is_valid() {
            self.errors = report.clone();
            return Err(SubmitError::Invalid(report));
        }

        self.errors.clear();
        self.state = SubmissionState::Submitting;
        Ok(self.draft.clone())
    }

    /// Leave `Submitting`, resetting the draft and clearing errors.
    pub fn finish_submit(&mut self) {
        self.draft = MovieDraft::default();
        self.errors.clear();
        self.state = SubmissionState::Idle;
    }

    /// Leave `Submitting` without touching the draft.
    pub fn abort_submit(&mut self) {
        self.state = SubmissionState::Idle;
    }
}
