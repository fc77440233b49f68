//! Board configuration.
//!
//! # Responsibility
//! - Hold the form validation thresholds and the rejection policy.
//! - Reject threshold combinations that could never accept input.
//!
//! # Invariants
//! - Defaults match the shipped board: titles and descriptions need more
//!   than 10 characters, team size must be strictly between 0 and 10.

use crate::validation::form::RejectionPolicy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Blocking notification text shown when a submit is rejected.
pub const DEFAULT_INVALID_INPUT_MESSAGE: &str = "Invalid input, try again";

/// Runtime configuration for one board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Exclusive lower bound on title character count.
    pub title_min_length: usize,
    /// Exclusive lower bound on description character count.
    pub description_min_length: usize,
    /// Exclusive lower bound on team size.
    pub people_min: f64,
    /// Exclusive upper bound on team size.
    pub people_max: f64,
    pub rejection_policy: RejectionPolicy,
    pub invalid_input_message: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title_min_length: 10,
            description_min_length: 10,
            people_min: 0.0,
            people_max: 10.0,
            rejection_policy: RejectionPolicy::default(),
            invalid_input_message: DEFAULT_INVALID_INPUT_MESSAGE.to_string(),
        }
    }
}

impl BoardConfig {
    /// Checks that the config can accept at least some input.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.people_min.is_finite() || !self.people_max.is_finite() {
            return Err(ConfigError::NonFiniteBound);
        }
        if self.people_min >= self.people_max {
            return Err(ConfigError::EmptyPeopleRange {
                min: self.people_min,
                max: self.people_max,
            });
        }
        if self.invalid_input_message.trim().is_empty() {
            return Err(ConfigError::EmptyInvalidInputMessage);
        }
        Ok(())
    }
}

/// Board configuration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonFiniteBound,
    EmptyPeopleRange { min: f64, max: f64 },
    EmptyInvalidInputMessage,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteBound => write!(f, "people bounds must be finite numbers"),
            Self::EmptyPeopleRange { min, max } => write!(
                f,
                "people_min ({min}) must be < people_max ({max})"
            ),
            Self::EmptyInvalidInputMessage => {
                write!(f, "invalid_input_message must not be empty")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{BoardConfig, ConfigError, DEFAULT_INVALID_INPUT_MESSAGE};
    use crate::validation::form::RejectionPolicy;

    #[test]
    fn default_config_is_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.invalid_input_message, DEFAULT_INVALID_INPUT_MESSAGE);
        assert_eq!(config.rejection_policy, RejectionPolicy::AnyFieldInvalid);
    }

    #[test]
    fn rejects_inverted_people_range() {
        let config = BoardConfig {
            people_min: 5.0,
            people_max: 5.0,
            ..BoardConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::EmptyPeopleRange { min: 5.0, max: 5.0 }
        );
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let config = BoardConfig {
            people_max: f64::INFINITY,
            ..BoardConfig::default()
        };
        assert_eq!(config.validate().unwrap_err(), ConfigError::NonFiniteBound);
    }

    #[test]
    fn deserializes_partial_json_over_defaults() {
        let config: BoardConfig = serde_json::from_value(serde_json::json!({
            "title_min_length": 3,
            "rejection_policy": "all_fields_invalid"
        }))
        .expect("partial config should deserialize");

        assert_eq!(config.title_min_length, 3);
        assert_eq!(config.description_min_length, 10);
        assert_eq!(config.rejection_policy, RejectionPolicy::AllFieldsInvalid);
    }
}
