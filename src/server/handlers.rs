//! Request handlers for the JSON endpoints and the static page shells.
//!
//! Handlers are infallible: the aggregation layer degrades every numeric edge
//! case to defined defaults, so a malformed query can never surface as a
//! 500-class failure.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;

use super::AppState;
use crate::queries::{self, LeaderboardRecord, SearchRecord};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    player: String,
}

/// # GET /search?player=<substring>
///
/// Per-tournament rows plus yearly and overall subtotals for the queried
/// player. An empty or missing `player` yields `[]`, not an error.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<SearchRecord>> {
    Json(queries::search(&state.dataset, &params.player))
}

/// # GET /leaderboard
///
/// Every player ranked descending by shots-weighted Adjusted Rating.
pub async fn leaderboard(State(state): State<Arc<AppState>>) -> Json<Vec<LeaderboardRecord>> {
    Json(queries::leaderboard(&state.dataset))
}

/// # GET /
pub async fn index_page() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// # GET /leaderboard_page
pub async fn leaderboard_page() -> Html<&'static str> {
    Html(include_str!("../../assets/leaderboard.html"))
}
