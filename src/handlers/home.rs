use crate::app_state::AppState;
use axum::{extract::State, response::Html};

/// Handler for the ballot page (GET /).
///
/// Renders a static HTML form with one radio button per configured option
/// and a submit action targeting `POST /vote`. No side effects.
pub async fn home_handler(State(state): State<AppState>) -> Html<String> {
    // ---
    let choices: String = state
        .vote_store()
        .options()
        .iter()
        .map(|option| {
            format!("    <input type=\"radio\" name=\"language\" value=\"{option}\"> {option}<br>\n")
        })
        .collect();

    Html(format!(
        "<h2>Vote for your favorite language</h2>\n\
         <form action=\"/vote\" method=\"post\">\n\
         {choices}    <input type=\"submit\" value=\"Vote\">\n\
         </form>\n\
         <br>\n\
         <a href='/result'>View Results (JSON)</a>\n"
    ))
}
