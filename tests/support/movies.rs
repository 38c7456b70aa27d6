//! Shared fixtures for catalog tests.

use movie_catalog::{MovieDraft, MovieRecord};

pub fn movie(id: u64, title: &str, rating: f64) -> MovieRecord {
    MovieDraft::new(
        title,
        format!("{} description", title),
        format!("https://example.com/{}.jpg", id),
        rating,
    )
    .into_record(id)
}

pub fn dune() -> MovieDraft {
    MovieDraft::new(
        "Dune",
        "...",
        "https://example.com/p.jpg",
        4.5,
    )
}

/// A mixed collection with ties, zero ratings and overlapping titles.
pub fn library() -> Vec<MovieRecord> {
    vec![
        movie(1, "Star Wars", 4.6),
        movie(2, "The Empire Strikes Back", 4.9),
        movie(5, "Return of the Jedi", 4.2),
        movie(3, "Zero Hour", 0.0),
        movie(9, "Starship Troopers", 3.1),
        movie(4, "STAR TREK", 3.9),
        movie(7, "Heat", 4.2),
        movie(8, "Alien", 5.0),
    ]
}

pub fn titles(records: &[MovieRecord]) -> Vec<&str> {
    records.iter().map(|r| r.title.as_str()).collect()
}
