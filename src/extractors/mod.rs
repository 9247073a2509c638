use crate::model::MovieRecord;

mod fields;

pub use fields::{
    extract_content_rating, extract_duration, extract_genre, extract_name, CONTENT_RATINGS,
    GENRES,
};

/// Build a movie record from one scraped fragment.
///
/// Each field is read from the full fragment independently; unrecognised
/// fields fall back to "N/A" or a zero duration.
pub fn extract_movie(fragment: &str) -> MovieRecord {
    MovieRecord {
        name: extract_name(fragment, "Unknown"),
        content_rating: extract_content_rating(fragment),
        duration: extract_duration(fragment),
        genre: extract_genre(fragment),
    }
}

/// Build one record per fragment, keeping page order.
pub fn extract_movies(fragments: &[String]) -> Vec<MovieRecord> {
    fragments.iter().map(|f| extract_movie(f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_movie() {
        let movie = extract_movie("DunePG-132\u{a0}h 35\u{a0}min.Acțiune");

        assert_eq!(
            movie,
            MovieRecord {
                name: "Dune".to_string(),
                content_rating: "PG-13".to_string(),
                duration: (2, 35),
                genre: "Acțiune".to_string(),
            }
        );
    }

    #[test]
    fn test_extract_movie_degrades_per_field() {
        let movie = extract_movie("1917");

        assert_eq!(movie.name, "N/A");
        assert_eq!(movie.content_rating, "N/A");
        assert_eq!(movie.duration, (0, 0));
        assert_eq!(movie.genre, "N/A");
    }

    #[test]
    fn test_extract_movies_keeps_order() {
        let fragments = vec![
            "SpencerR1 h 57 min.Dramă".to_string(),
            "DunePG-132 h 35 min.Acțiune".to_string(),
        ];

        let names: Vec<_> = extract_movies(&fragments)
            .into_iter()
            .map(|movie| movie.name)
            .collect();
        assert_eq!(names, vec!["Spencer", "Dune"]);
        assert!(extract_movies(&[]).is_empty());
    }
}
