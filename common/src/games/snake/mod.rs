mod body;
mod game_state;
mod scheduler;
mod session;
mod settings;
mod snapshot;
mod types;

pub use body::Snake;
pub use game_state::{SnakeGameState, place_food};
pub use scheduler::{SessionEnd, TickHandle, TickScheduler};
pub use session::SnakeSession;
pub use settings::{MAX_TICK_INTERVAL, MIN_TICK_INTERVAL, SnakeSessionSettings};
pub use snapshot::{CellKind, SnakeSnapshot};
pub use types::{Direction, GameStatus, Point, TickOutcome};
