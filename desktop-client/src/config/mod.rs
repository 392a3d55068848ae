mod leaderboard_config;
mod main_config;
mod snake_config;

pub use leaderboard_config::LeaderboardConfig;
pub use main_config::{get_config_manager, get_exe_dir, ClientConfigManager, Config};
pub use snake_config::SnakeConfig;
