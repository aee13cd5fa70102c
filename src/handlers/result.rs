use crate::app_state::AppState;
use axum::{extract::State, Json};
use std::collections::HashMap;

/// Handler for current standings (GET /result).
///
/// Responds with the tally map as JSON, one entry per configured option.
/// Read-only: two calls with no intervening vote return identical bodies.
pub async fn vote_results(State(state): State<AppState>) -> Json<HashMap<String, u64>> {
    // ---
    Json(state.vote_store().results())
}
