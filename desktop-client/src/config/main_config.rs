use std::path::PathBuf;

use common::config::{ConfigManager, Validate};
use common::storage::{FileKeyValueStore, YamlCodec};
use serde::{Deserialize, Serialize};

use super::{LeaderboardConfig, SnakeConfig};

const CONFIG_FILE_NAME: &str = "snake_client_config.yaml";

pub type ClientConfigManager = ConfigManager<FileKeyValueStore, Config, YamlCodec>;

pub fn get_exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe_path| exe_path.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_default()
}

fn get_config_path() -> String {
    get_exe_dir().join(CONFIG_FILE_NAME).to_string_lossy().into_owned()
}

pub fn get_config_manager() -> ClientConfigManager {
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub snake: SnakeConfig,
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.leaderboard.validate()?;
        Ok(())
    }
}
