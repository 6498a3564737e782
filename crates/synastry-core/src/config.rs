//! Engine configuration loaded from `SYNASTRY_*` environment variables.
//!
//! Toggles gate the OPTIONAL report sections only; scoring constants and
//! narrative resolution are never configurable. Unset or invalid values fall
//! back to the defaults documented per field.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// | Env | Default | Description |
/// |-----|---------|-------------|
/// | SYNASTRY_VIRAL_ENABLED | true | Compute the lust/logic/toxic breakdown. |
/// | SYNASTRY_CONFLICT_MATRIX_ENABLED | true | Compute the conflict matrix section. |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// SYNASTRY_VIRAL_ENABLED: include the viral breakdown in results.
    #[serde(default = "default_true")]
    pub viral_enabled: bool,
    /// SYNASTRY_CONFLICT_MATRIX_ENABLED: include the conflict matrix in results.
    #[serde(default = "default_true")]
    pub conflict_matrix_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            viral_enabled: true,
            conflict_matrix_enabled: true,
        }
    }
}

impl EngineConfig {
    /// Load toggles from environment. Unset or invalid => defaults.
    pub fn from_env() -> Self {
        Self {
            viral_enabled: env_bool("SYNASTRY_VIRAL_ENABLED", true),
            conflict_matrix_enabled: env_bool("SYNASTRY_CONFLICT_MATRIX_ENABLED", true),
        }
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let cfg = EngineConfig::default();
        assert!(cfg.viral_enabled);
        assert!(cfg.conflict_matrix_enabled);
    }

    #[test]
    fn test_env_bool_parsing() {
        assert!(env_bool("SYNASTRY_TEST_UNSET_KEY", true));
        assert!(!env_bool("SYNASTRY_TEST_UNSET_KEY", false));
    }
}
