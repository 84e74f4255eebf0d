pub mod kinopoisk;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::film::{FilmDetails, FilmSearchMatch};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} API error: {status} - {body}")]
    Api {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("Invalid response from {service}: {message}")]
    InvalidResponse {
        service: &'static str,
        message: String,
    },
}

/// Search and details operations of a movie database.
#[async_trait]
pub trait FilmCatalog: Send + Sync {
    /// Matches for a free-text title, in the catalog's relevance order.
    async fn search(&self, title: &str) -> Result<Vec<FilmSearchMatch>, ClientError>;

    /// Extended information for an identifier, `None` when the catalog has none.
    async fn film_details(&self, kp_id: i64) -> Result<Option<FilmDetails>, ClientError>;
}
