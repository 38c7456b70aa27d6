//! Integration tests for validating and submitting new movies.

#[path = "../support/mod.rs"]
mod support;

mod emitter;

use movie_catalog::{
    validate, view, CatalogSession, Field, FieldError, MovieDraft, SubmissionState, SubmitError,
};
use support::movies::{dune, titles};

fn fill(session: &mut CatalogSession, draft: &MovieDraft) {
    session.update_field(Field::Title, &draft.title);
    session.update_field(Field::Description, &draft.description);
    session.update_field(Field::PosterUrl, &draft.poster_url);
    session.update_field(Field::Rating, &draft.rating.to_string());
}

#[test]
fn valid_dune_draft_lands_as_fourth_record() {
    let mut session = CatalogSession::seeded();
    fill(&mut session, &dune());

    session.submit().unwrap();

    assert_eq!(session.catalog().len(), 4);
    let added = &session.catalog().records()[3];
    assert_eq!(added.id, 4);
    assert_eq!(added.title, "Dune");
    assert_eq!(added.description, "...");
    assert_eq!(added.poster_url, "https://example.com/p.jpg");
    assert_eq!(added.rating, 4.5);

    assert_eq!(
        titles(session.visible()),
        vec!["Inception", "The Dark Knight", "Interstellar", "Dune"]
    );
}

#[test]
fn successful_submit_resets_the_form() {
    let mut session = CatalogSession::seeded();
    fill(&mut session, &dune());

    session.submit().unwrap();

    let form = session.form();
    assert_eq!(form.draft(), &MovieDraft::default());
    assert_eq!(form.draft().rating, 5.0);
    assert!(form.errors().is_empty());
    assert_eq!(form.state(), SubmissionState::Idle);
    assert_eq!(view::submit_label(form.state()), "Add Movie");
}

#[test]
fn three_bad_fields_are_reported_at_once() {
    let draft = MovieDraft::new("", "", "https://example.com/p.jpg", 7.0);

    let report = validate(&draft);

    assert_eq!(report.len(), 3);
    let fields: Vec<Field> = report.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, vec![Field::Title, Field::Description, Field::Rating]);
}

#[test]
fn invalid_url_is_distinct_from_missing_url() {
    let mut draft = dune();

    draft.poster_url = "not a url".into();
    let invalid = validate(&draft);
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid.get(Field::PosterUrl), Some(FieldError::Invalid));

    draft.poster_url = String::new();
    let missing = validate(&draft);
    assert_eq!(missing.len(), 1);
    assert_eq!(missing.get(Field::PosterUrl), Some(FieldError::Required));
}

#[test]
fn rejected_submission_keeps_values_and_surfaces_errors() {
    let mut session = CatalogSession::seeded();
    let mut draft = dune();
    draft.poster_url = "not a url".into();
    fill(&mut session, &draft);

    let err = session.submit().unwrap_err();

    let SubmitError::Invalid(report) = err else {
        panic!("expected validation failure");
    };
    assert_eq!(report.get(Field::PosterUrl), Some(FieldError::Invalid));
    assert_eq!(session.catalog().len(), 3);
    assert_eq!(session.visible().len(), 3);
    assert_eq!(session.form().draft().poster_url, "not a url");
    assert_eq!(session.form().draft().title, "Dune");
    assert_eq!(
        session.form().errors().message(Field::PosterUrl).as_deref(),
        Some("Please enter a valid URL")
    );
    assert_eq!(session.form().state(), SubmissionState::Idle);

    session.update_field(Field::PosterUrl, "https://example.com/p.jpg");
    assert!(session.form().errors().is_empty());
    session.submit().unwrap();
    assert_eq!(session.catalog().last().map(|r| r.id), Some(4));
}

#[test]
fn in_flight_submission_blocks_a_second_one() {
    let mut session = CatalogSession::seeded();
    fill(&mut session, &dune());

    let draft = session.form_mut().begin_submit().unwrap();
    assert_eq!(draft, dune());
    assert_eq!(view::submit_label(session.form().state()), "Adding...");

    assert_eq!(session.submit(), Err(SubmitError::AlreadySubmitting));
    assert_eq!(session.catalog().len(), 3);

    session.form_mut().finish_submit();
    assert_eq!(session.form().state(), SubmissionState::Idle);
}

#[test]
fn ids_keep_climbing_across_submissions() {
    let mut session = CatalogSession::seeded();
    for expected in 4..=6 {
        fill(&mut session, &dune());
        session.submit().unwrap();
        assert_eq!(session.catalog().last().map(|r| r.id), Some(expected));
    }
    let ids: Vec<u64> = session.catalog().records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}
