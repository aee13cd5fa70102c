// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::Result;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable, falling back to a default.
///
/// Every knob in this service has a sensible default, so missing
/// configuration never prevents startup; the default deployment runs
/// with no environment at all.
macro_rules! optional_env {
    // ---
    ($key:literal, $default:expr) => {
        std::env::var($key).unwrap_or_else(|_| $default.to_string())
    };
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
/// All configuration is validated eagerly during initialization.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: server::ServerConfig,
    pub voting: voting::VotingConfig,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any configuration is present but invalid.
    /// This function is intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            server: server::ServerConfig::from_env()?,
            voting: voting::VotingConfig::from_env()?,
        })
    }
}

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---
    use super::*;

    /// HTTP listener configuration.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Socket address the server binds at startup. Defaults to all
        /// interfaces on port 8000.
        pub bind_addr: String,
    }

    impl ServerConfig {
        /// Builds a [`ServerConfig`] from environment variables.
        pub fn from_env() -> Result<Self> {
            // ---
            let bind_addr = optional_env!("VOTING_BIND_ADDR", "0.0.0.0:8000");

            Ok(Self { bind_addr })
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Voting configuration
// ============================================================

mod voting {
    // ---
    use super::*;

    /// Ballot configuration.
    ///
    /// The option set is fixed for the lifetime of the process: it is read
    /// once here and never changes afterwards.
    #[derive(Debug, Clone)]
    pub struct VotingConfig {
        /// Options voters can choose between, in ballot order.
        pub options: Vec<String>,
    }

    impl VotingConfig {
        /// Builds a [`VotingConfig`] from environment variables.
        ///
        /// `VOTING_OPTIONS` is a comma-separated list; surrounding
        /// whitespace per entry is ignored.
        ///
        /// # Errors
        /// Returns an error if the list contains no usable option.
        pub fn from_env() -> Result<Self> {
            // ---
            let raw = optional_env!("VOTING_OPTIONS", "Python,Java,Go");

            let options: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|option| !option.is_empty())
                .map(String::from)
                .collect();

            anyhow::ensure!(
                !options.is_empty(),
                "VOTING_OPTIONS must name at least one option"
            );

            Ok(Self { options })
        }
    }
}
pub use voting::VotingConfig;

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use anyhow::Result;
    use serial_test::serial;

    #[test]
    #[serial]
    fn server_defaults_applied() -> Result<()> {
        // ---
        std::env::remove_var("VOTING_BIND_ADDR");

        let cfg = server::ServerConfig::from_env()?;
        assert_eq!(cfg.bind_addr, "0.0.0.0:8000");

        Ok(())
    }

    #[test]
    #[serial]
    fn server_overrides_defaults() -> Result<()> {
        // ---
        std::env::set_var("VOTING_BIND_ADDR", "127.0.0.1:9100");

        let cfg = server::ServerConfig::from_env()?;
        assert_eq!(cfg.bind_addr, "127.0.0.1:9100");

        std::env::remove_var("VOTING_BIND_ADDR");
        Ok(())
    }

    #[test]
    #[serial]
    fn voting_defaults_applied() -> Result<()> {
        // ---
        std::env::remove_var("VOTING_OPTIONS");

        let cfg = voting::VotingConfig::from_env()?;
        assert_eq!(cfg.options, ["Python", "Java", "Go"]);

        Ok(())
    }

    #[test]
    #[serial]
    fn voting_options_are_trimmed() -> Result<()> {
        // ---
        std::env::set_var("VOTING_OPTIONS", " Rust , Zig ,, C ");

        let cfg = voting::VotingConfig::from_env()?;
        assert_eq!(cfg.options, ["Rust", "Zig", "C"]);

        std::env::remove_var("VOTING_OPTIONS");
        Ok(())
    }

    #[test]
    #[serial]
    fn empty_voting_options_fails() {
        // ---
        std::env::set_var("VOTING_OPTIONS", " ,, ");

        let err = voting::VotingConfig::from_env().expect_err("expected configuration error");
        assert!(
            err.to_string().contains("at least one option"),
            "unexpected error: {err}"
        );

        std::env::remove_var("VOTING_OPTIONS");
    }

    #[test]
    #[serial]
    fn app_config_from_env_success() -> Result<()> {
        // ---
        std::env::remove_var("VOTING_BIND_ADDR");
        std::env::remove_var("VOTING_OPTIONS");

        let cfg = AppConfig::from_env()?;
        assert_eq!(cfg.server.bind_addr, "0.0.0.0:8000");
        assert_eq!(cfg.voting.options.len(), 3);

        Ok(())
    }
}
