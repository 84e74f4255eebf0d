//! End-to-end tests for lookup followed by persistence.
//!
//! The Kinopoisk API is replaced by an in-memory catalog.

use async_trait::async_trait;
use kinolookup::clients::{ClientError, FilmCatalog};
use kinolookup::models::film::{Country, FilmDetails, FilmSearchMatch, Genre};
use kinolookup::models::movie::MovieRecord;
use kinolookup::services::{
    LookupOutcome, LookupService, NotFoundReason, SaveOutcome, save_results,
};

struct StaticCatalog {
    matches: Vec<FilmSearchMatch>,
    details: Option<FilmDetails>,
}

#[async_trait]
impl FilmCatalog for StaticCatalog {
    async fn search(&self, _title: &str) -> Result<Vec<FilmSearchMatch>, ClientError> {
        Ok(self.matches.clone())
    }

    async fn film_details(&self, kp_id: i64) -> Result<Option<FilmDetails>, ClientError> {
        Ok(self.details.clone().filter(|d| d.kp_id == kp_id))
    }
}

fn search_match(kp_id: i64) -> FilmSearchMatch {
    FilmSearchMatch {
        kp_id,
        name_ru: Some("Брат".to_string()),
        name_en: None,
        year: Some(1997),
    }
}

fn brat_details() -> FilmDetails {
    FilmDetails {
        kp_id: 41_519,
        name_ru: Some("Брат".to_string()),
        name_en: None,
        year: Some(1997),
        rating_kp: Some(8.3),
        rating_imdb: Some(7.9),
        genres: vec![
            Genre {
                name: "драма".to_string(),
            },
            Genre {
                name: "криминал".to_string(),
            },
        ],
        countries: vec![Country {
            name: "Россия".to_string(),
        }],
        description: Some("Демобилизовавшись, Данила Багров возвращается в родной городок".to_string()),
        poster_url: None,
    }
}

async fn look_up_brat() -> MovieRecord {
    let service = LookupService::new(StaticCatalog {
        matches: vec![search_match(41_519)],
        details: Some(brat_details()),
    });

    match service.lookup("Брат").await {
        LookupOutcome::Found(record) => record,
        other => panic!("expected a record, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_then_save_json() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("movies").to_string_lossy().into_owned();

    let record = look_up_brat().await;
    let outcome = save_results(std::slice::from_ref(&record), "json", &base).unwrap();
    assert_eq!(outcome, SaveOutcome::Saved(dir.path().join("movies.json")));

    let text = std::fs::read_to_string(dir.path().join("movies.json")).unwrap();
    let restored: Vec<MovieRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, vec![record]);

    let raw: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(raw[0]["link"], "https://www.kinopoisk.ru/film/41519/");
    assert_eq!(raw[0]["countries"], serde_json::json!(["Россия"]));
}

#[tokio::test]
async fn test_lookup_then_save_csv() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("movies").to_string_lossy().into_owned();

    let record = look_up_brat().await;
    save_results(&[record.clone(), record], "CSV", &base).unwrap();

    let mut reader = csv::Reader::from_path(dir.path().join("movies.csv")).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 11);
    assert_eq!(&headers[0], "kp_id");
    assert_eq!(&headers[10], "link");

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[1][6], r#"["драма","криминал"]"#);
}

#[tokio::test]
async fn test_not_found_outcomes_write_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let empty = LookupService::new(StaticCatalog {
        matches: Vec::new(),
        details: Some(brat_details()),
    });
    let outcome = empty.lookup("Брат").await;
    assert!(matches!(
        outcome,
        LookupOutcome::NotFound(NotFoundReason::NoSearchResults)
    ));

    let no_details = LookupService::new(StaticCatalog {
        matches: vec![search_match(1)],
        details: Some(brat_details()),
    });
    let outcome = no_details.lookup("Брат").await;
    assert!(matches!(
        outcome,
        LookupOutcome::NotFound(NotFoundReason::NoDetails { kp_id: 1 })
    ));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
