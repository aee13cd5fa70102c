// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod home;
mod metrics;
mod result;
mod shared_types;
mod vote;

// Core handlers
pub use home::home_handler;
pub use metrics::metrics_handler;
pub use result::vote_results;
pub use vote::cast_vote;
