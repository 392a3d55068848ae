use std::time::Duration;

use crate::games::snake::{Direction, Point};

pub const BOARD_SIZE: usize = 15;

pub const INITIAL_SNAKE: [Point; 2] = [Point { x: 7, y: 7 }, Point { x: 6, y: 7 }];
pub const INITIAL_DIRECTION: Direction = Direction::Right;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(120);

pub const LEADERBOARD_KEY: &str = "snake_highscores";
pub const LEADERBOARD_CAPACITY: usize = 5;
pub const ANONYMOUS_NAME: &str = "Anonymous";
pub const MAX_NAME_LENGTH: usize = 16;
