mod metrics;
mod vote_store;

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};

// Publicly expose the vote store and its error taxonomy
pub use vote_store::{VoteError, VoteStore};
