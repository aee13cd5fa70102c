//! In-memory vote tally.
//!
//! The store owns a fixed set of options established at construction time.
//! No option is ever added or removed afterwards, and per-option counts only
//! grow. The tally map sits behind a mutex so two concurrent submissions for
//! the same option cannot lose an increment.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

/// Ways a vote submission can be rejected. Both are client errors and
/// leave the tally untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteError {
    /// The caller supplied no option at all (absent or empty field).
    MissingLanguage,
    /// The supplied value is not one of the configured options.
    /// Carries the full option list so callers can report what is valid.
    InvalidChoice(Vec<String>),
}

impl fmt::Display for VoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteError::MissingLanguage => write!(f, "No language provided"),
            VoteError::InvalidChoice(valid) => write!(f, "Invalid choice. Valid: {valid:?}"),
        }
    }
}

impl std::error::Error for VoteError {}

/// Vote counts keyed by option name.
pub struct VoteStore {
    /// Configured options in declaration order, kept separately from the
    /// tally map so error messages and the ballot form render predictably.
    options: Vec<String>,
    votes: Mutex<HashMap<String, u64>>,
}

impl VoteStore {
    /// Creates a store with every configured option at zero votes.
    pub fn new(options: &[String]) -> Self {
        // ---
        let votes = options.iter().map(|option| (option.clone(), 0)).collect();

        VoteStore {
            options: options.to_vec(),
            votes: Mutex::new(votes),
        }
    }

    /// Configured options, in declaration order.
    pub fn options(&self) -> &[String] {
        // ---
        &self.options
    }

    /// Registers one vote and returns the updated tally snapshot.
    ///
    /// `language` is the submitted value, if the caller supplied one.
    /// An absent or empty value yields [`VoteError::MissingLanguage`]; a
    /// value outside the configured set yields [`VoteError::InvalidChoice`].
    /// Validation happens before the tally is touched.
    pub fn record_vote(&self, language: Option<&str>) -> Result<HashMap<String, u64>, VoteError> {
        // ---
        let language = match language {
            Some(value) if !value.is_empty() => value,
            _ => return Err(VoteError::MissingLanguage),
        };

        let mut votes = self.votes.lock().expect("vote store mutex poisoned");
        match votes.get_mut(language) {
            Some(count) => {
                *count += 1;
                Ok(votes.clone())
            }
            None => Err(VoteError::InvalidChoice(self.options.clone())),
        }
    }

    /// Snapshot of the current tally for every configured option.
    ///
    /// Read-only and idempotent: two calls with no intervening vote
    /// return identical maps.
    pub fn results(&self) -> HashMap<String, u64> {
        // ---
        self.votes.lock().expect("vote store mutex poisoned").clone()
    }
}
