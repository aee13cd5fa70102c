//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The `AppState` contains the
//! vote store and the metrics implementation.
//!
//! The state is designed to be cheaply cloneable (using `Arc` internally)
//! so it can be passed efficiently to each request handler without
//! expensive copying of resources.

use crate::domain::{MetricsPtr, VoteStore};
use std::sync::Arc;

/// Shared application state passed to all Axum handlers.
///
/// This struct serves as the Dependency Injection container for the application.
/// It holds all shared resources needed by HTTP handlers and is cloned cheaply
/// for each request via Axum's `State` extractor.
///
/// # Lifecycle
///
/// 1. Created once in `create_router()` during application startup
/// 2. Attached to the Axum router via `.with_state(app_state)`
/// 3. Cloned automatically by Axum for each incoming HTTP request
/// 4. Handlers extract via `State(state): State<AppState>`
///
/// # Fields
///
/// - `vote_store`: In-memory tally for the configured options; the only
///   mutable state in the process, and the mutation goes through its own
///   internal lock.
/// - `metrics`: Metrics implementation for observability (Prometheus or no-op)
#[derive(Clone)]
pub(crate) struct AppState {
    /// Vote tally shared by every request handler.
    vote_store: Arc<VoteStore>,

    /// Metrics implementation for recording application events.
    ///
    /// Either Prometheus-backed (production) or no-op (testing/development).
    /// Wrapped in `Arc` via `MetricsPtr` for cheap cloning.
    metrics: MetricsPtr,
}

impl AppState {
    // ---

    pub fn new(vote_store: Arc<VoteStore>, metrics: MetricsPtr) -> Self {
        // ---
        AppState {
            vote_store,
            metrics,
        }
    }

    /// Get a reference to the vote store.
    pub(crate) fn vote_store(&self) -> &VoteStore {
        // ---
        &self.vote_store
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }
}
