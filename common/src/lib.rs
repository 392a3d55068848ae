pub mod config;
pub mod defaults;
pub mod games;
pub mod leaderboard;
pub mod logger;
pub mod storage;

pub mod version {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
