use super::types::{Direction, GameStatus, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Head,
    Body,
    Food,
}

/// Read-only copy of the game handed to renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSnapshot {
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub status: GameStatus,
    pub direction: Direction,
    pub tick: u64,
    pub board_size: usize,
}

impl SnakeSnapshot {
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }

    pub fn cell_at(&self, point: Point) -> CellKind {
        if self.head() == Some(point) {
            CellKind::Head
        } else if self.snake.contains(&point) {
            CellKind::Body
        } else if self.food == Some(point) {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }
}
