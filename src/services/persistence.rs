//! Writes lookup results to a JSON or CSV file.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Unsupported output format: {0}. Supported formats are 'json' and 'csv'")]
    UnsupportedFormat(String),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Record {index} is not a flat object")]
    NotAnObject { index: usize },

    #[error("Record {index} has columns {found:?}, expected {expected:?}")]
    InconsistentColumns {
        index: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PersistenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(PersistenceError::UnsupportedFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    NothingToSave,
}

/// Output path for `base_name` in `format`.
#[must_use]
pub fn output_path(base_name: &str, format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("{base_name}.{}", format.extension()))
}

/// Serializes `records` into `<base_name>.<ext>`, replacing any existing file.
///
/// An empty slice writes nothing. The format is matched case-insensitively
/// and checked before any file is touched. For CSV every record must
/// serialize to an object with the same keys as the first one.
pub fn save_results<T: Serialize>(
    records: &[T],
    format: &str,
    base_name: &str,
) -> Result<SaveOutcome, PersistenceError> {
    if records.is_empty() {
        debug!("No records to save");
        return Ok(SaveOutcome::NothingToSave);
    }

    let format: OutputFormat = format.parse()?;
    let path = output_path(base_name, format);

    match format {
        OutputFormat::Json => write_json(records, &path)?,
        OutputFormat::Csv => write_csv(records, &path)?,
    }

    info!("Saved {} record(s) to {}", records.len(), path.display());
    Ok(SaveOutcome::Saved(path))
}

fn create(path: &Path) -> Result<BufWriter<File>, PersistenceError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn write_json<T: Serialize>(records: &[T], path: &Path) -> Result<(), PersistenceError> {
    // Serialize before opening so a failure leaves no truncated file behind.
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;

    let mut writer = create(path)?;
    writer
        .write_all(&buf)
        .and_then(|()| writer.flush())
        .map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn to_rows<T: Serialize>(records: &[T]) -> Result<(Vec<String>, Vec<Vec<String>>), PersistenceError> {
    let mut headers: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let Value::Object(object) = serde_json::to_value(record)? else {
            return Err(PersistenceError::NotAnObject { index });
        };

        let keys: Vec<String> = object.keys().cloned().collect();
        if index == 0 {
            headers = keys;
        } else if keys != headers {
            return Err(PersistenceError::InconsistentColumns {
                index,
                expected: headers,
                found: keys,
            });
        }

        rows.push(row_cells(&headers, &object));
    }

    Ok((headers, rows))
}

fn row_cells(headers: &[String], object: &Map<String, Value>) -> Vec<String> {
    headers
        .iter()
        .map(|field| match object.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(v) => v.to_string(),
        })
        .collect()
}

fn write_csv<T: Serialize>(records: &[T], path: &Path) -> Result<(), PersistenceError> {
    let (headers, rows) = to_rows(records)?;

    let csv_err = |source: csv::Error| PersistenceError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = csv::Writer::from_writer(create(path)?);
    wtr.write_record(&headers).map_err(csv_err)?;
    for row in &rows {
        wtr.write_record(row).map_err(csv_err)?;
    }
    wtr.flush().map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
