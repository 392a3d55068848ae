use std::time::Duration;

use common::config::Validate;
use common::games::snake::SnakeSessionSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeConfig {
    pub tick_interval_ms: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl From<&SnakeConfig> for SnakeSessionSettings {
    fn from(config: &SnakeConfig) -> Self {
        Self {
            tick_interval: Duration::from_millis(config.tick_interval_ms as u64),
            seed: config.seed,
        }
    }
}

impl Validate for SnakeConfig {
    fn validate(&self) -> Result<(), String> {
        SnakeSessionSettings::from(self).validate()
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 120,
            seed: None,
        }
    }
}
