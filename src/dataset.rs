//! Dataset loading and row-level typing.
//!
//! The source table is a CSV with at least the columns `Player`, `Tournament`,
//! `Shots`, `Shot+`, and `Tournament Rating`. It is read once at startup into
//! an ordered, immutable [`Dataset`] that every request then shares.
//!
//! Numeric cells are coerced leniently: anything that fails to parse becomes a
//! fixed default (`0` for `Shots` and `Shot+`, `100` for `Tournament Rating`),
//! so every loaded row carries finite numbers. Structural problems — a missing
//! file or a missing required column — are fatal instead, since the dataset is
//! foundational shared state.

use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use tracing::{info, warn};

use crate::error::{Result, ShotPlusError};

/// Tournament rating applied when the source cell is missing or unparseable.
pub const DEFAULT_RATING: f64 = 100.0;

/// Columns the source CSV must carry; anything else is passed over.
const REQUIRED_COLUMNS: [&str; 5] = [
    "Player",
    "Tournament",
    "Shots",
    "Shot+",
    "Tournament Rating",
];

/// First run of 4 consecutive digits in a tournament name is its year.
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").expect("valid year regex"));

/// One shot-record: a single player's result at a single tournament.
#[derive(Debug, Clone, Deserialize)]
pub struct Row {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Tournament")]
    pub tournament: String,
    #[serde(rename = "Shots", deserialize_with = "number_or_zero")]
    pub shots: f64,
    #[serde(rename = "Shot+", deserialize_with = "number_or_zero")]
    pub shot_plus: f64,
    #[serde(rename = "Tournament Rating", deserialize_with = "rating_or_default")]
    pub rating: f64,
}

impl Row {
    /// Year parsed from the first 4-digit run in the tournament name, if any.
    pub fn year(&self) -> Option<i32> {
        YEAR_RE
            .find(&self.tournament)
            .and_then(|m| m.as_str().parse().ok())
    }
}

fn number_or_zero<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<f64, D::Error> {
    Ok(coerce(&String::deserialize(de)?, 0.0))
}

fn rating_or_default<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<f64, D::Error> {
    Ok(coerce(&String::deserialize(de)?, DEFAULT_RATING))
}

/// Parse a cell as a finite number, falling back to `default`.
fn coerce(raw: &str, default: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => default,
    }
}

/// The in-memory table shared, read-only, by all query handlers.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    /// Load the dataset from a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| ShotPlusError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        info!(rows = dataset.len(), path = %path.display(), "dataset loaded");
        Ok(dataset)
    }

    /// Load the dataset from any reader carrying CSV with a header row.
    ///
    /// Fails if any required column is absent; individual bad numeric cells
    /// are coerced to defaults instead.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(rdr);
        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ShotPlusError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: Row = record?;
            if row.year().is_none() {
                warn!(
                    player = %row.player,
                    tournament = %row.tournament,
                    "no 4-digit year in tournament name; row is excluded from year subtotals"
                );
            }
            rows.push(row);
        }
        Ok(Self { rows })
    }

    /// Build a dataset directly from rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// All rows in original source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
