//! Value types returned by a film catalog.
//!
//! These are already validated: a `FilmSearchMatch` or `FilmDetails` always
//! carries an identifier. Wire-level shapes live next to the client that
//! produces them.

use serde::{Deserialize, Serialize};

/// A lightweight search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmSearchMatch {
    pub kp_id: i64,
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub year: Option<i32>,
}

/// Extended film information fetched by identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmDetails {
    pub kp_id: i64,
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub year: Option<i32>,
    pub rating_kp: Option<f64>,
    pub rating_imdb: Option<f64>,
    pub genres: Vec<Genre>,
    pub countries: Vec<Country>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
}

impl FilmDetails {
    /// Details carrying only an identifier.
    #[must_use]
    pub const fn bare(kp_id: i64) -> Self {
        Self {
            kp_id,
            name_ru: None,
            name_en: None,
            year: None,
            rating_kp: None,
            rating_imdb: None,
            genres: Vec::new(),
            countries: Vec::new(),
            description: None,
            poster_url: None,
        }
    }
}
