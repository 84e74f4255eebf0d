use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use super::{ClientError, FilmCatalog};
use crate::config::KinopoiskConfig;
use crate::models::film::{Country, FilmDetails, FilmSearchMatch, Genre};

const SERVICE: &str = "Kinopoisk";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    films: Vec<SearchFilm>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchFilm {
    film_id: Option<i64>,
    name_ru: Option<String>,
    name_en: Option<String>,
    year: Option<YearField>,
}

/// The search endpoint reports years as text (`"1999"`, `"2008-2013"`),
/// the details endpoint as numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum YearField {
    Number(i32),
    Text(String),
}

impl YearField {
    fn year(&self) -> Option<i32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s
                .trim()
                .split(|c: char| !c.is_ascii_digit())
                .next()
                .and_then(|digits| digits.parse().ok()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilmResponse {
    kinopoisk_id: Option<i64>,
    name_ru: Option<String>,
    name_en: Option<String>,
    name_original: Option<String>,
    year: Option<YearField>,
    rating_kinopoisk: Option<f64>,
    rating_imdb: Option<f64>,
    #[serde(default)]
    genres: Vec<GenreEntry>,
    #[serde(default)]
    countries: Vec<CountryEntry>,
    description: Option<String>,
    poster_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenreEntry {
    genre: String,
}

#[derive(Debug, Deserialize)]
struct CountryEntry {
    country: String,
}

impl TryFrom<SearchFilm> for FilmSearchMatch {
    type Error = ClientError;

    fn try_from(film: SearchFilm) -> Result<Self, Self::Error> {
        let kp_id = film.film_id.ok_or_else(|| ClientError::InvalidResponse {
            service: SERVICE,
            message: "search result without filmId".to_string(),
        })?;

        Ok(Self {
            kp_id,
            name_ru: film.name_ru,
            name_en: film.name_en,
            year: film.year.as_ref().and_then(YearField::year),
        })
    }
}

impl TryFrom<FilmResponse> for FilmDetails {
    type Error = ClientError;

    fn try_from(film: FilmResponse) -> Result<Self, Self::Error> {
        let kp_id = film.kinopoisk_id.ok_or_else(|| ClientError::InvalidResponse {
            service: SERVICE,
            message: "film details without kinopoiskId".to_string(),
        })?;

        Ok(Self {
            kp_id,
            name_ru: film.name_ru,
            name_en: film.name_en.or(film.name_original),
            year: film.year.as_ref().and_then(YearField::year),
            rating_kp: film.rating_kinopoisk,
            rating_imdb: film.rating_imdb,
            genres: film
                .genres
                .into_iter()
                .map(|g| Genre { name: g.genre })
                .collect(),
            countries: film
                .countries
                .into_iter()
                .map(|c| Country { name: c.country })
                .collect(),
            description: film.description,
            poster_url: film.poster_url,
        })
    }
}

/// Client for the Kinopoisk Unofficial API.
#[derive(Clone)]
pub struct KinopoiskClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl KinopoiskClient {
    pub fn new(config: &KinopoiskConfig) -> Result<Self, ClientError> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn search_url(&self, title: &str) -> String {
        format!(
            "{}/api/v2.1/films/search-by-keyword?keyword={}&page=1",
            self.base_url,
            urlencoding::encode(title)
        )
    }

    fn details_url(&self, kp_id: i64) -> String {
        format!("{}/api/v2.2/films/{}", self.base_url, kp_id)
    }

    async fn api_error(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ClientError::Api {
            service: SERVICE,
            status,
            body,
        }
    }
}

#[async_trait]
impl FilmCatalog for KinopoiskClient {
    async fn search(&self, title: &str) -> Result<Vec<FilmSearchMatch>, ClientError> {
        let url = self.search_url(title);
        debug!("Kinopoisk search: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-API-KEY", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let response: SearchResponse = response.json().await?;
        debug!("Kinopoisk returned {} matches", response.films.len());

        response
            .films
            .into_iter()
            .map(FilmSearchMatch::try_from)
            .collect()
    }

    async fn film_details(&self, kp_id: i64) -> Result<Option<FilmDetails>, ClientError> {
        let url = self.details_url(kp_id);
        debug!("Kinopoisk details: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-API-KEY", &self.api_key)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let film: FilmResponse = response.json().await?;
        FilmDetails::try_from(film).map(Some)
    }
}
