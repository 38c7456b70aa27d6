use crate::record::MovieRecord;

/// The fixed records every fresh catalog starts with.
pub fn seed_records() -> Vec<MovieRecord> {
    vec![
        MovieRecord {
            id: 1,
            title: "Inception".to_string(),
            description: "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.".to_string(),
            poster_url: "https://m.media-amazon.com/images/M/MV5BMjAxMzY3NjcxNF5BMl5BanBnXkFtZTcwNTI5OTM0Mw@@._V1_.jpg".to_string(),
            rating: 4.8,
        },
        MovieRecord {
            id: 2,
            title: "The Dark Knight".to_string(),
            description: "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.".to_string(),
            poster_url: "https://m.media-amazon.com/images/M/MV5BMTMxNTMwODM0NF5BMl5BanBnXkFtZTcwODAyMTk2Mw@@._V1_.jpg".to_string(),
            rating: 5.0,
        },
        MovieRecord {
            id: 3,
            title: "Interstellar".to_string(),
            description: "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.".to_string(),
            poster_url: "https://m.media-amazon.com/images/M/MV5BZjdkOTU3MDktN2IxOS00OGEyLWFmMjktY2FiMmZkNWIyODZiXkEyXkFqcGdeQXVyMTMxODk2OTU@._V1_.jpg".to_string(),
            rating: 4.7,
        },
    ]
}
