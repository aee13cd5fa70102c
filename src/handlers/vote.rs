use crate::app_state::AppState;
use crate::handlers::shared_types::{ErrorResponse, VoteResponse};
use axum::{
    extract::{Form, FromRequest, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

/// Vote submission body, shared by the form and JSON encodings.
#[derive(Debug, Default, Deserialize)]
pub struct VotePayload {
    language: Option<String>,
}

/// Handler for casting a vote (POST /vote).
///
/// Reads the chosen option from a form-encoded body first, falling back to
/// a JSON body field. Delegates validation and the increment to the vote
/// store.
///
/// - On success, responds with `200 OK`, a confirmation message, and the
///   updated tally map.
/// - If no option was supplied, or the option is not on the ballot,
///   responds with `400 Bad Request` and a structured error body.
#[tracing::instrument(skip(state, req))]
pub async fn cast_vote(State(state): State<AppState>, req: Request) -> Response {
    // ---
    let language = read_language(req).await;

    match state.vote_store().record_vote(language.as_deref()) {
        Ok(votes) => {
            let language = language.unwrap_or_default();
            tracing::info!("vote recorded for {language}");

            (
                StatusCode::OK,
                Json(VoteResponse {
                    message: format!("Vote for {language} recorded!"),
                    votes,
                }),
            )
                .into_response()
        }
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
            .into_response(),
    }
}

/// Pulls the chosen option out of the request body.
///
/// Form-encoded bodies win; a JSON object with a `language` field is the
/// fallback. An unreadable body is treated the same as no choice at all.
async fn read_language(req: Request) -> Option<String> {
    // ---
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(payload) = Form::<VotePayload>::from_request(req, &()).await.ok()?;
        payload.language
    } else {
        let Json(payload) = Json::<VotePayload>::from_request(req, &()).await.ok()?;
        payload.language
    }
}
