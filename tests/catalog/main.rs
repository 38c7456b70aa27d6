//! Integration tests for the append-only catalog and id assignment.

#[path = "../support/mod.rs"]
mod support;

mod records;

use movie_catalog::{
    next_id, Catalog, CatalogConfig, CatalogError, CatalogSession, Field, FieldError, MovieRecord,
    Record,
};
use support::movies::{dune, library, movie, titles};

#[test]
fn seed_has_three_records_in_order() {
    let catalog = Catalog::seeded();
    assert_eq!(
        titles(catalog.records()),
        vec!["Inception", "The Dark Knight", "Interstellar"]
    );
    let ratings: Vec<f64> = catalog.records().iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![4.8, 5.0, 4.7]);
    assert_eq!(MovieRecord::COLLECTION, "movies");
}

#[test]
fn new_id_is_one_past_the_maximum() {
    let catalog = Catalog::from_records(library()).unwrap();
    assert_eq!(next_id(catalog.records()), Some(10));

    let grown = catalog.add_record(dune()).unwrap();
    assert_eq!(grown.records().last().map(|r| r.id), Some(10));
}

#[test]
fn empty_catalog_starts_at_one() {
    let grown = Catalog::new().add_record(dune()).unwrap();
    assert_eq!(grown.records()[0].id, 1);
    assert_eq!(grown.records()[0].id(), 1);
}

#[test]
fn prior_catalog_is_never_mutated() {
    let original = Catalog::from_records(vec![movie(1, "One", 1.0), movie(2, "Two", 2.0)]).unwrap();
    let before: Vec<MovieRecord> = original.records().to_vec();

    let first = original.add_record(dune()).unwrap();
    let second = original.add_record(dune()).unwrap();

    assert_eq!(original.records(), &before[..]);
    // Both appends branch from the same parent, so they share the id
    assert_eq!(first.records()[2].id, 3);
    assert_eq!(second.records()[2].id, 3);
}

#[test]
fn session_built_from_config_uses_its_seed() {
    let config = CatalogConfig::from_json(
        r#"{"seed": [
            {"id": 41, "title": "Alien", "description": "In space.", "posterURL": "https://example.com/a.jpg", "rating": 5.0}
        ]}"#,
    )
    .unwrap();

    let session = CatalogSession::new(&config).unwrap();

    assert_eq!(titles(session.visible()), vec!["Alien"]);
    assert_eq!(next_id(session.catalog().records()), Some(42));
}

#[test]
fn session_refuses_a_seed_that_breaks_field_rules() {
    let config = CatalogConfig::from_json(
        r#"{"seed": [
            {"id": 1, "title": "Alien", "description": "In space.", "posterURL": "https://example.com/a.jpg", "rating": 5.0},
            {"id": 2, "title": "Aliens", "description": "More of them.", "posterURL": "https://example.com/b.jpg", "rating": 1e19}
        ]}"#,
    )
    .unwrap();

    let err = CatalogSession::new(&config).unwrap_err();

    let CatalogError::InvalidRecord { id, report } = err else {
        panic!("expected invalid seed record");
    };
    assert_eq!(id, 2);
    assert_eq!(report.get(Field::Rating), Some(FieldError::OutOfRange));
    assert_eq!(report.len(), 1);
}
