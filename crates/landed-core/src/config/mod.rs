//! Engine configuration, loadable from TOML with full defaults.

pub mod inference_config;
pub mod upgrade_config;

pub use inference_config::InferenceConfig;
pub use upgrade_config::UpgradeConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, EngineResult};

/// Default values shared by the config structs.
pub mod defaults {
    pub const DEFAULT_FREIGHT_RATE_SEA_PER_KG: f64 = 0.9;
    pub const DEFAULT_FREIGHT_RATE_AIR_PER_KG: f64 = 5.5;
    pub const DEFAULT_FREIGHT_RATE_EXPRESS_PER_KG: f64 = 8.0;
    pub const DEFAULT_FALLBACK_DUTY_RATE: f64 = 0.05;
    pub const DEFAULT_HS_CANDIDATE_MIN_CONFIDENCE: f64 = 0.4;

    pub const DEFAULT_CROSSING_COOLDOWN_SECS: u64 = 300;
    pub const DEFAULT_SAME_LEVEL_COOLDOWN_SECS: u64 = 3600;
    pub const DEFAULT_RETRY_BACKOFF_SECS: u64 = 60;
    pub const DEFAULT_LOOKUP_CREDIT_COST: u32 = 1;
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub inference: InferenceConfig,
    pub upgrade: UpgradeConfig,
}

impl EngineConfig {
    /// Parse from a TOML string. Missing sections and fields take defaults.
    pub fn from_toml_str(s: &str) -> EngineResult<Self> {
        let config: EngineConfig = toml::from_str(s).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &std::path::Path) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::from)?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.inference.fallback_duty_rate) {
            return Err(ConfigError::Invalid {
                field: "inference.fallback_duty_rate".to_string(),
                reason: "must be a fraction in [0, 1]".to_string(),
            });
        }
        if self.upgrade.same_level_cooldown_secs < self.upgrade.crossing_cooldown_secs {
            return Err(ConfigError::Invalid {
                field: "upgrade.same_level_cooldown_secs".to_string(),
                reason: "same-level cooldown must not be shorter than the crossing cooldown"
                    .to_string(),
            });
        }
        Ok(())
    }
}
