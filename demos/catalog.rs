//! Terminal walk-through of a catalog session.
//!
//! Run with `RUST_LOG=debug` to watch every re-derivation.

use movie_catalog::{view, CatalogConfig, CatalogSession, Field, SubmitError};
use tracing_subscriber::EnvFilter;

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_level(true)
        .init();
}

fn show(session: &CatalogSession) {
    println!(
        "-- title: {:?}, minimum rating: {} --",
        session.criteria().title(),
        view::min_rating_label(session.criteria().min_rating())
    );
    print!("{}", view::render_list(session.visible()));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    let config = CatalogConfig::from_json(r#"{ "submit_delay_ms": 500 }"#)?;
    let mut session = CatalogSession::new(&config)?;
    show(&session);

    session.set_rating_slider(4.8);
    show(&session);

    session.set_title_filter("dark");
    show(&session);

    session.set_title_filter("no such film");
    show(&session);
    session.clear_filters();

    // Missing description and a malformed poster URL
    session.update_field(Field::Title, "Dune");
    session.update_field(Field::PosterUrl, "not a url");
    session.update_field(Field::Rating, "4.5");
    if let Err(SubmitError::Invalid(report)) = session.submit() {
        for (field, error) in report.iter() {
            println!("{}: {}", field, error.message(field));
        }
    }

    session.update_field(Field::Description, "A noble family becomes embroiled in a war for Arrakis.");
    session.update_field(Field::PosterUrl, "https://example.com/p.jpg");
    println!("[{}]", view::submit_label(session.form().state()));
    session.submit()?;
    if let Some(added) = session.catalog().last() {
        println!("added movie {}", added.id);
    }
    show(&session);

    Ok(())
}
