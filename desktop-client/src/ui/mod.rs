mod app;
mod board;
mod colors;
mod leaderboard_panel;

pub use app::SnakeApp;
