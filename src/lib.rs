// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

use handlers::{cast_vote, home_handler, metrics_handler, vote_results};
use std::env;
use std::sync::Arc;

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;
mod middleware;

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_noop_metrics, // ---
    create_prom_metrics,
};

/// Build the HTTP router with metrics implementation determined by environment variables.
pub fn create_router() -> Result<Router> {
    // ---
    // Load all configuration from environment
    let config = AppConfig::from_env()?;

    // Determine metrics implementation from environment
    let metrics_type = env::var("VOTING_METRICS_TYPE").unwrap_or_else(|_| "prom".to_string());
    let metrics = if metrics_type == "noop" {
        create_noop_metrics()?
    } else {
        create_prom_metrics()?
    };

    tracing_subscriber::fmt::try_init().ok(); // Ignores if already initialized

    // Build application state with all dependencies
    let vote_store = Arc::new(domain::VoteStore::new(&config.voting.options));
    let app_state = AppState::new(vote_store, metrics);

    // Tracked routes sit under the metrics layer. `/metrics` is registered
    // after the layer so scrapes do not measure themselves.
    let router = Router::new()
        .route("/", get(home_handler))
        .route("/vote", post(cast_vote))
        .route("/result", get(vote_results))
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            middleware::track_metrics,
        ))
        .route("/metrics", get(metrics_handler))
        .with_state(app_state);

    Ok(router)
}
