use std::path::{Path, PathBuf};

use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LeaderboardConfig {
    /// Relative paths are resolved against the executable's directory.
    pub directory: String,
}

impl LeaderboardConfig {
    pub fn resolve_directory(&self, base_dir: &Path) -> PathBuf {
        let directory = Path::new(&self.directory);
        if directory.is_absolute() {
            directory.to_path_buf()
        } else {
            base_dir.join(directory)
        }
    }
}

impl Validate for LeaderboardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.directory.trim().is_empty() {
            return Err("leaderboard directory must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            directory: "snake_data".to_string(),
        }
    }
}
