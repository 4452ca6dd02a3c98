//! Read-only query functions over the loaded dataset.
//!
//! Both queries are pure: they filter, group, and aggregate the shared table
//! into serializable output records and never touch I/O, so the HTTP handlers
//! stay thin and the logic is directly testable.
//!
//! JSON field names reproduce the service's wire format exactly, hence the
//! `rename` attributes.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::{Dataset, Row};
use crate::stats::{adjusted_rating, round2, weighted_average, weighted_average_floored};

/// One line of search output: either a per-tournament row or a subtotal.
///
/// Subtotal rows carry `"TOTAL <year>"` (or `"TOTAL"` for the overall summary)
/// in `player` and `"-"` in `tournament`. `year` is `None` for source rows
/// whose tournament name has no 4-digit year, and `0` for the overall summary.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRecord {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Tournament")]
    pub tournament: String,
    #[serde(rename = "Tournament Rating")]
    pub rating: f64,
    #[serde(rename = "Shots")]
    pub shots: f64,
    #[serde(rename = "Shot+")]
    pub shot_plus: f64,
    #[serde(rename = "Adjusted Rating")]
    pub adjusted_rating: f64,
    #[serde(rename = "Year")]
    pub year: Option<i32>,
}

/// One player's aggregate line on the leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRecord {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Total Shots")]
    pub total_shots: f64,
    #[serde(rename = "Weighted Shot+")]
    pub shot_plus: f64,
    #[serde(rename = "Weighted Tournament Rating")]
    pub rating: f64,
    #[serde(rename = "Adjusted Rating")]
    pub adjusted_rating: f64,
}

/// Case-insensitive substring search over players.
///
/// Returns, in order: one record per matched row (original dataset order),
/// one shots-weighted subtotal per year (ascending), then a single overall
/// `"TOTAL"` record. An empty or whitespace query returns an empty vec.
///
/// Rows without a recognizable year appear in the per-tournament listing with
/// `year: None`; they are skipped by the year grouping but still feed the
/// overall total.
pub fn search(dataset: &Dataset, query: &str) -> Vec<SearchRecord> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let matched: Vec<&Row> = dataset
        .rows()
        .iter()
        .filter(|row| row.player.to_lowercase().contains(&needle))
        .collect();
    if matched.is_empty() {
        return Vec::new();
    }

    let mut records: Vec<SearchRecord> = matched
        .iter()
        .map(|row| SearchRecord {
            player: row.player.clone(),
            tournament: row.tournament.clone(),
            rating: row.rating,
            shots: row.shots,
            shot_plus: row.shot_plus,
            adjusted_rating: round2(adjusted_rating(row.shot_plus, row.rating)),
            year: row.year(),
        })
        .collect();

    let mut by_year: BTreeMap<i32, Vec<&Row>> = BTreeMap::new();
    for &row in &matched {
        if let Some(year) = row.year() {
            by_year.entry(year).or_default().push(row);
        }
    }
    for (year, rows) in &by_year {
        records.push(subtotal(rows, format!("TOTAL {year}"), Some(*year)));
    }

    records.push(subtotal(&matched, "TOTAL".to_string(), Some(0)));
    records
}

/// Shots-weighted subtotal over a group of rows.
fn subtotal(rows: &[&Row], player: String, year: Option<i32>) -> SearchRecord {
    let total_shots: f64 = rows.iter().map(|row| row.shots).sum();
    let shot_plus = weighted_average(rows.iter().map(|row| (row.shot_plus, row.shots)));
    let rating = weighted_average(rows.iter().map(|row| (row.rating, row.shots)));
    let adjusted = weighted_average(
        rows.iter()
            .map(|row| (adjusted_rating(row.shot_plus, row.rating), row.shots)),
    );

    SearchRecord {
        player,
        tournament: "-".to_string(),
        rating: round2(rating),
        shots: total_shots,
        shot_plus: round2(shot_plus),
        adjusted_rating: round2(adjusted),
        year,
    }
}

/// Rank every player by shots-weighted Adjusted Rating, descending.
///
/// Aggregates use the floor-of-1 weight guard, so a player whose shots all
/// total zero resolves to zeros rather than a division error. Sorting happens
/// on the unrounded key; ties keep alphabetical player order.
pub fn leaderboard(dataset: &Dataset) -> Vec<LeaderboardRecord> {
    let mut by_player: BTreeMap<&str, Vec<&Row>> = BTreeMap::new();
    for row in dataset.rows() {
        by_player.entry(row.player.as_str()).or_default().push(row);
    }

    let mut ranked: Vec<(f64, LeaderboardRecord)> = by_player
        .into_iter()
        .map(|(player, rows)| {
            let total_shots: f64 = rows.iter().map(|row| row.shots).sum();
            let shot_plus =
                weighted_average_floored(rows.iter().map(|row| (row.shot_plus, row.shots)));
            let rating = weighted_average_floored(rows.iter().map(|row| (row.rating, row.shots)));
            let adjusted = weighted_average_floored(
                rows.iter()
                    .map(|row| (adjusted_rating(row.shot_plus, row.rating), row.shots)),
            );

            let record = LeaderboardRecord {
                player: player.to_string(),
                total_shots,
                shot_plus: round2(shot_plus),
                rating: round2(rating),
                adjusted_rating: round2(adjusted),
            };
            (adjusted, record)
        })
        .collect();

    // Stable sort keeps the alphabetical grouping order for equal keys.
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
    ranked.into_iter().map(|(_, record)| record).collect()
}

#[cfg(test)]
mod tests;
