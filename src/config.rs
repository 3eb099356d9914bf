//! Runtime configuration read from `CREPE_*` environment variables.

use thiserror::Error;

use crate::policy::{StationPolicy, TransitionMode};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Fallback filter when `RUST_LOG` is unset.
    pub log_filter: String,
    pub mailbox_capacity: usize,
    pub station_policy: StationPolicy,
    pub transition_mode: TransitionMode,
    /// Start with the four demo orders from the stand's mock data.
    pub seed_demo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            mailbox_capacity: 32,
            station_policy: StationPolicy::default(),
            transition_mode: TransitionMode::default(),
            seed_demo: true,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to an unrecognised value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(filter) = lookup("CREPE_LOG") {
            config.log_filter = filter;
        }

        if let Some(raw) = lookup("CREPE_MAILBOX") {
            config.mailbox_capacity = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(invalid("CREPE_MAILBOX", raw, "expected a positive integer")),
            };
        }

        if let Some(raw) = lookup("CREPE_STATION_POLICY") {
            config.station_policy = match raw.trim() {
                "least-loaded" => StationPolicy::LeastLoaded,
                "round-robin" => StationPolicy::RoundRobin,
                "random" => StationPolicy::Random,
                _ => {
                    return Err(invalid(
                        "CREPE_STATION_POLICY",
                        raw.clone(),
                        "expected least-loaded, round-robin or random",
                    ))
                }
            };
        }

        if let Some(raw) = lookup("CREPE_TRANSITIONS") {
            config.transition_mode = match raw.trim() {
                "unconstrained" => TransitionMode::Unconstrained,
                "forward-only" => TransitionMode::ForwardOnly,
                _ => {
                    return Err(invalid(
                        "CREPE_TRANSITIONS",
                        raw.clone(),
                        "expected unconstrained or forward-only",
                    ))
                }
            };
        }

        if let Some(raw) = lookup("CREPE_SEED_DEMO") {
            config.seed_demo = match raw.trim() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(invalid("CREPE_SEED_DEMO", raw.clone(), "expected true or false")),
            };
        }

        Ok(config)
    }
}

fn invalid(key: &'static str, value: String, reason: &'static str) -> ConfigError {
    ConfigError::InvalidValue { key, value, reason }
}
