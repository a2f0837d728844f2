//! Startup configuration for the overview.
//!
//! # Responsibility
//! - Describe the initial overview heading and seed lists.
//! - Parse configuration JSON handed over by the UI shell.
//!
//! # Invariants
//! - Missing fields fall back to the built-in defaults.
//! - Unknown fields are rejected instead of silently ignored.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Overview heading shown on first launch.
pub const DEFAULT_OVERVIEW_TITLE: &str = "📌 Mes To-Do Lists";
/// Lists present on first launch, in display order.
pub const DEFAULT_SEED_LISTS: &[&str] = &["Travail", "Courses", "Sport"];

/// Core startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    pub overview_title: String,
    /// Titles of lists created at startup. Blank entries are skipped.
    pub seed_lists: Vec<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            overview_title: DEFAULT_OVERVIEW_TITLE.to_string(),
            seed_lists: DEFAULT_SEED_LISTS
                .iter()
                .map(|title| (*title).to_string())
                .collect(),
        }
    }
}

impl CoreConfig {
    /// Parses configuration JSON.
    ///
    /// Blank input yields the default configuration.
    ///
    /// # Errors
    /// - Returns `ConfigError::Json` for malformed JSON, wrong field types or
    ///   unknown fields.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

/// Configuration parse errors.
#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid core config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, DEFAULT_OVERVIEW_TITLE};

    #[test]
    fn blank_input_is_default() {
        assert_eq!(CoreConfig::from_json_str("  ").unwrap(), CoreConfig::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = CoreConfig::from_json_str(r#"{"seed_lists": []}"#).unwrap();
        assert_eq!(config.overview_title, DEFAULT_OVERVIEW_TITLE);
        assert!(config.seed_lists.is_empty());
    }

    #[test]
    fn rejects_unknown_fields_and_wrong_types() {
        let unknown = CoreConfig::from_json_str(r#"{"theme": "dark"}"#).unwrap_err();
        assert!(unknown.to_string().contains("unknown field"));

        let wrong_type = CoreConfig::from_json_str(r#"{"seed_lists": "Sport"}"#).unwrap_err();
        assert!(wrong_type.to_string().starts_with("invalid core config"));
    }
}
