use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;

use crate::models::film::FilmDetails;

const KINOPOISK_FILM_URL: &str = "https://www.kinopoisk.ru/film";

/// Flat result of one successful lookup.
///
/// `link` is not stored; it is derived from `kp_id` whenever the record is
/// serialized, so it always appears as the last field of the output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieRecord {
    pub kp_id: i64,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub year: Option<i32>,
    pub rating_kp: Option<f64>,
    pub rating_imdb: Option<f64>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
}

/// Public film page for a Kinopoisk identifier.
#[must_use]
pub fn film_link(kp_id: i64) -> String {
    format!("{KINOPOISK_FILM_URL}/{kp_id}/")
}

impl MovieRecord {
    #[must_use]
    pub fn link(&self) -> String {
        film_link(self.kp_id)
    }
}

impl From<FilmDetails> for MovieRecord {
    fn from(details: FilmDetails) -> Self {
        Self {
            kp_id: details.kp_id,
            title_ru: details.name_ru,
            title_en: details.name_en,
            year: details.year,
            rating_kp: details.rating_kp,
            rating_imdb: details.rating_imdb,
            genres: details.genres.into_iter().map(|g| g.name).collect(),
            countries: details.countries.into_iter().map(|c| c.name).collect(),
            description: details.description,
            poster_url: details.poster_url,
        }
    }
}

impl Serialize for MovieRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MovieRecord", 11)?;
        state.serialize_field("kp_id", &self.kp_id)?;
        state.serialize_field("title_ru", &self.title_ru)?;
        state.serialize_field("title_en", &self.title_en)?;
        state.serialize_field("year", &self.year)?;
        state.serialize_field("rating_kp", &self.rating_kp)?;
        state.serialize_field("rating_imdb", &self.rating_imdb)?;
        state.serialize_field("genres", &self.genres)?;
        state.serialize_field("countries", &self.countries)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("poster_url", &self.poster_url)?;
        state.serialize_field("link", &self.link())?;
        state.end()
    }
}
