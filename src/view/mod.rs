//! Plain-text rendering of what the display layer shows.

use std::fmt::{self, Write};

use crate::form::SubmissionState;
use crate::record::{MovieRecord, MAX_RATING};

pub const PLACEHOLDER_POSTER: &str = "/placeholder.jpg";
pub const EMPTY_TITLE: &str = "No movies found";
pub const EMPTY_DESCRIPTION: &str =
    "Try adjusting your filters or add a new movie to your collection.";

const FULL_STAR: char = '★';
const HALF_STAR: char = '½';

/// Star breakdown of a rating: one per whole point plus an optional half.
///
/// Ratings above the maximum draw as the maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stars {
    pub full: usize,
    pub half: bool,
}

impl Stars {
    pub fn for_rating(rating: f64) -> Self {
        if !rating.is_finite() || rating <= 0.0 {
            return Self { full: 0, half: false };
        }
        let rating = rating.min(MAX_RATING);
        Self {
            full: rating.floor() as usize,
            half: rating.fract() >= 0.5,
        }
    }
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.full {
            f.write_char(FULL_STAR)?;
        }
        if self.half {
            f.write_char(HALF_STAR)?;
        }
        Ok(())
    }
}

/// A single movie as the list shows it.
#[derive(Clone, Copy, Debug)]
pub struct MovieCard<'a> {
    record: &'a MovieRecord,
}

impl<'a> MovieCard<'a> {
    pub fn new(record: &'a MovieRecord) -> Self {
        Self { record }
    }

    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.record.rating)
    }

    pub fn stars(&self) -> Stars {
        Stars::for_rating(self.record.rating)
    }

    pub fn poster_src(&self) -> &'a str {
        if self.record.poster_url.is_empty() {
            PLACEHOLDER_POSTER
        } else {
            &self.record.poster_url
        }
    }

    pub fn alt_text(&self) -> String {
        format!("{} poster", self.record.title)
    }
}

impl fmt::Display for MovieCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.record.title, self.rating_label())?;
        writeln!(f, "  {}", self.stars())?;
        writeln!(f, "  {}", self.record.description)?;
        write!(f, "  poster: {}", self.poster_src())
    }
}

/// Render `records` as cards, or the empty-state message.
pub fn render_list(records: &[MovieRecord]) -> String {
    if records.is_empty() {
        return format!("{}\n{}\n", EMPTY_TITLE, EMPTY_DESCRIPTION);
    }
    let mut out = String::new();
    for record in records {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}\n", MovieCard::new(record));
    }
    out
}

/// Label for the minimum-rating slider.
pub fn min_rating_label(min_rating: Option<f64>) -> String {
    match min_rating {
        Some(rating) => format!("{:.1}", rating),
        None => "Any".to_string(),
    }
}

pub fn submit_label(state: SubmissionState) -> &'static str {
    match state {
        SubmissionState::Idle => "Add Movie",
        SubmissionState::Submitting => "Adding...",
    }
}
