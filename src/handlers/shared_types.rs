use serde::Serialize;
use std::collections::HashMap;

/// JSON body returned after a successfully recorded vote.
///
/// Carries a human-readable confirmation and the updated tally map.
#[derive(Serialize)]
pub struct VoteResponse {
    pub message: String,
    pub votes: HashMap<String, u64>,
}

/// JSON body for client errors.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
