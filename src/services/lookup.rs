//! Resolves a free-text title to a single [`MovieRecord`].
//!
//! The first search match is trusted as the most relevant one; its details
//! are projected into a record. Faults from the catalog never escape as
//! errors: every call ends in a [`LookupOutcome`].

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::clients::{ClientError, FilmCatalog};
use crate::models::movie::MovieRecord;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("search request failed: {0}")]
    Search(#[source] ClientError),

    #[error("details request for film {kp_id} failed: {source}")]
    Details {
        kp_id: i64,
        #[source]
        source: ClientError,
    },
}

/// Why a lookup produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    NoSearchResults,
    NoDetails { kp_id: i64 },
}

#[derive(Debug)]
pub enum LookupOutcome {
    Found(MovieRecord),
    NotFound(NotFoundReason),
    Failed(LookupError),
}

impl LookupOutcome {
    #[must_use]
    pub const fn record(&self) -> Option<&MovieRecord> {
        match self {
            Self::Found(record) => Some(record),
            _ => None,
        }
    }
}

pub struct LookupService<C> {
    catalog: C,
}

impl<C: FilmCatalog> LookupService<C> {
    #[must_use]
    pub const fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub async fn lookup(&self, title: &str) -> LookupOutcome {
        info!("Looking up '{}'", title);

        let matches = match self.catalog.search(title).await {
            Ok(matches) => matches,
            Err(e) => {
                warn!("Search for '{}' failed: {}", title, e);
                return LookupOutcome::Failed(LookupError::Search(e));
            }
        };

        let Some(first) = matches.first() else {
            debug!("No matches for '{}'", title);
            return LookupOutcome::NotFound(NotFoundReason::NoSearchResults);
        };

        debug!(
            "Using first of {} matches: {} ({:?})",
            matches.len(),
            first.kp_id,
            first.name_ru
        );
        let kp_id = first.kp_id;

        match self.catalog.film_details(kp_id).await {
            Ok(Some(details)) => LookupOutcome::Found(MovieRecord::from(details)),
            Ok(None) => {
                debug!("No details for film {}", kp_id);
                LookupOutcome::NotFound(NotFoundReason::NoDetails { kp_id })
            }
            Err(e) => {
                warn!("Details for film {} failed: {}", kp_id, e);
                LookupOutcome::Failed(LookupError::Details { kp_id, source: e })
            }
        }
    }
}
