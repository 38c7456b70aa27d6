#![cfg(feature = "emitter")]

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use movie_catalog::{CatalogSession, Field, MovieRecord, MOVIE_ADDED};

#[test]
fn movie_added_is_emitted_with_the_new_record() {
    let mut session = CatalogSession::seeded();

    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    session.on(MOVIE_ADDED, move |json| {
        sink.lock().unwrap().push(json);
    });

    session.update_field(Field::Title, "Dune");
    session.update_field(Field::Description, "...");
    session.update_field(Field::PosterUrl, "https://example.com/p.jpg");
    session.update_field(Field::Rating, "4.5");
    session.submit().unwrap();

    // EventEmitter runs listeners on their own threads
    thread::sleep(Duration::from_millis(50));

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let record: MovieRecord = serde_json::from_str(&received[0]).unwrap();
    assert_eq!(record.id, 4);
    assert_eq!(record.title, "Dune");
}

#[test]
fn rejected_submission_emits_nothing() {
    let mut session = CatalogSession::seeded();

    let received = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&received);
    session.on(MOVIE_ADDED, move |json| {
        sink.lock().unwrap().push(json);
    });

    assert!(session.submit().is_err());

    thread::sleep(Duration::from_millis(50));
    assert!(received.lock().unwrap().is_empty());
}
