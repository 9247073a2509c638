use crate::model::NOT_AVAILABLE;
use once_cell::sync::Lazy;
use regex::Regex;

/// Rating tokens in match priority order
pub const CONTENT_RATINGS: [&str; 5] = ["PG-13", "NC-17", "PG", "R", "G"];

/// Genre labels as they appear on the results page, in match priority order
pub const GENRES: [&str; 9] = [
    "Thriller",
    "Dramă",
    "Dragoste",
    "De comedie",
    "Istorie",
    "Acțiune",
    "Anime",
    "Narațiune",
    "De groază",
];

// A rating token immediately followed by "<hours> h <minutes> min"
static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:G|PG(?:-13)?|R|NC-17)(\d+)\s*h\s*(\d+)\s*min")
        .expect("duration pattern is valid")
});

/// Find the content rating of a fragment.
///
/// The first token of [`CONTENT_RATINGS`] contained anywhere in the fragment
/// wins, so a fragment holding "PG-13" reports "PG-13" and not "PG".
pub fn extract_content_rating(fragment: &str) -> String {
    CONTENT_RATINGS
        .iter()
        .find(|rating| fragment.contains(*rating))
        .map_or_else(|| NOT_AVAILABLE.to_string(), |rating| rating.to_string())
}

/// Find the running time of a fragment as `(hours, minutes)`.
///
/// Returns `(0, 0)` when the fragment has no duration right after a rating
/// token. Minutes are not normalised.
pub fn extract_duration(fragment: &str) -> (u32, u32) {
    DURATION_PATTERN
        .captures(fragment)
        .and_then(|caps| {
            let hours = caps[1].parse::<u32>().ok()?;
            let minutes = caps[2].parse::<u32>().ok()?;
            Some((hours, minutes))
        })
        .unwrap_or((0, 0))
}

/// Find the title of a fragment.
///
/// The title is everything before the first digit, minus the rating glued to
/// its end. `_content_rating` is accepted for callers that already know the
/// rating but the suffix rules below do not depend on it.
pub fn extract_name(fragment: &str, _content_rating: &str) -> String {
    let end = fragment
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(fragment.len());
    let mut name = &fragment[..end];

    if name.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    // Suffixes are ASCII so byte slicing stays on char boundaries.
    if name.ends_with('R') || name.ends_with('G') {
        name = &name[..name.len() - 1];
    } else if name.ends_with("PG") {
        name = &name[..name.len() - 2];
    } else if name.ends_with("PG-") {
        name = &name[..name.len() - 3];
    }

    name.trim().to_string()
}

/// Find the genre of a fragment, first label of [`GENRES`] wins.
pub fn extract_genre(fragment: &str) -> String {
    GENRES
        .iter()
        .find(|genre| fragment.contains(*genre))
        .map_or_else(|| NOT_AVAILABLE.to_string(), |genre| genre.to_string())
}
