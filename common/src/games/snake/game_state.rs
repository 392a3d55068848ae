use crate::defaults::{BOARD_SIZE, INITIAL_DIRECTION, INITIAL_SNAKE};
use crate::games::SessionRng;
use crate::log;
use super::body::Snake;
use super::snapshot::SnakeSnapshot;
use super::types::{Direction, GameStatus, Point, TickOutcome};

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Option<Point>,
    score: u32,
    status: GameStatus,
}

impl SnakeGameState {
    pub fn new(rng: &mut SessionRng) -> Self {
        let snake = Snake::new(INITIAL_SNAKE).expect("Initial snake template should be valid");
        let food = place_food(&snake, rng);
        Self {
            snake,
            direction: INITIAL_DIRECTION,
            pending_direction: None,
            food,
            score: 0,
            status: GameStatus::Running,
        }
    }

    pub fn reset(&mut self, rng: &mut SessionRng) {
        *self = Self::new(rng);
    }

    /// Queues `direction` for the next tick. Dropped silently when the game is
    /// over or when it reverses the direction the last tick moved in.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Over || direction.is_opposite(&self.direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    pub fn update(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.status == GameStatus::Over {
            return TickOutcome::Frozen;
        }

        let direction = self.pending_direction.unwrap_or(self.direction);
        let next_head = self.snake.head().step(direction, BOARD_SIZE);

        // The tail has not moved yet, so stepping onto it counts as a collision.
        if self.snake.occupies(&next_head) {
            self.status = GameStatus::Over;
            log!(
                "Self collision at ({}, {}). Final score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            return TickOutcome::Collided { score: self.score };
        }

        let outcome = if self.food == Some(next_head) {
            self.snake.grow_to(next_head);
            self.score += 1;
            self.food = place_food(&self.snake, rng);
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            TickOutcome::Ate { score: self.score }
        } else {
            self.snake.move_to(next_head);
            TickOutcome::Moved
        };

        self.direction = direction;
        self.pending_direction = None;
        outcome
    }

    pub fn snapshot(&self, tick: u64) -> SnakeSnapshot {
        SnakeSnapshot {
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            score: self.score,
            status: self.status,
            direction: self.direction,
            tick,
            board_size: BOARD_SIZE,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    #[cfg(test)]
    pub(crate) fn from_parts(body: &[Point], direction: Direction, food: Option<Point>) -> Self {
        Self {
            snake: Snake::new(body.iter().copied()).unwrap(),
            direction,
            pending_direction: None,
            food,
            score: 0,
            status: GameStatus::Running,
        }
    }
}

/// Rejection-samples a free cell. `None` only when the snake fills the board.
pub fn place_food(snake: &Snake, rng: &mut SessionRng) -> Option<Point> {
    if snake.len() >= BOARD_SIZE * BOARD_SIZE {
        return None;
    }

    loop {
        let candidate = Point::new(
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        );
        if !snake.occupies(&candidate) {
            return Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn points(coords: &[(usize, usize)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn body(state: &SnakeGameState) -> Vec<Point> {
        state.snake().segments().copied().collect()
    }

    /// Boustrophedon walk over the whole board, row by row.
    fn serpentine() -> Vec<Point> {
        let mut path = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for y in 0..BOARD_SIZE {
            if y % 2 == 0 {
                path.extend((0..BOARD_SIZE).map(|x| Point::new(x, y)));
            } else {
                path.extend((0..BOARD_SIZE).rev().map(|x| Point::new(x, y)));
            }
        }
        path
    }

    #[test]
    fn test_new_uses_initial_template() {
        let mut rng = SessionRng::new(42);
        let state = SnakeGameState::new(&mut rng);
        assert_eq!(body(&state), points(&[(7, 7), (6, 7)]));
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert_eq!(state.status(), GameStatus::Running);
        let food = state.food().unwrap();
        assert!(!state.snake().occupies(&food));
    }

    #[test]
    fn test_first_tick_moves_without_growing() {
        let mut rng = SessionRng::new(42);
        let mut state =
            SnakeGameState::from_parts(&points(&[(7, 7), (6, 7)]), Direction::Right, Some(Point::new(0, 0)));
        assert_eq!(state.update(&mut rng), TickOutcome::Moved);
        assert_eq!(body(&state), points(&[(8, 7), (7, 7)]));
        assert!(!state.is_over());
    }

    #[test]
    fn test_head_wraps_across_right_edge() {
        let mut rng = SessionRng::new(1);
        let mut state =
            SnakeGameState::from_parts(&points(&[(14, 7), (13, 7)]), Direction::Right, Some(Point::new(3, 3)));
        state.update(&mut rng);
        assert_eq!(state.snake().head(), Point::new(0, 7));
        assert!(!state.is_over());
    }

    #[test]
    fn test_head_wraps_across_top_edge() {
        let mut rng = SessionRng::new(1);
        let mut state =
            SnakeGameState::from_parts(&points(&[(4, 0), (4, 1)]), Direction::Up, Some(Point::new(3, 3)));
        state.update(&mut rng);
        assert_eq!(state.snake().head(), Point::new(4, 14));
    }

    #[test]
    fn test_moving_onto_current_tail_ends_game() {
        let mut rng = SessionRng::new(1);
        let start = points(&[(5, 6), (6, 6), (6, 7), (5, 7)]);
        let mut state = SnakeGameState::from_parts(&start, Direction::Left, Some(Point::new(0, 0)));
        state.set_direction(Direction::Down);
        assert_eq!(state.update(&mut rng), TickOutcome::Collided { score: 0 });
        assert!(state.is_over());
        assert_eq!(body(&state), start);
    }

    #[test]
    fn test_full_row_wrapping_onto_tail_ends_game() {
        let mut rng = SessionRng::new(1);
        let row: Vec<Point> = (0..BOARD_SIZE).rev().map(|x| Point::new(x, 7)).collect();
        let mut state = SnakeGameState::from_parts(&row, Direction::Right, Some(Point::new(0, 0)));
        assert_eq!(state.update(&mut rng), TickOutcome::Collided { score: 0 });
        assert_eq!(body(&state), row);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let mut rng = SessionRng::new(3);
        let mut state =
            SnakeGameState::from_parts(&points(&[(7, 7), (6, 7)]), Direction::Right, Some(Point::new(8, 7)));
        assert_eq!(state.update(&mut rng), TickOutcome::Ate { score: 1 });
        assert_eq!(body(&state), points(&[(8, 7), (7, 7), (6, 7)]));
        assert_eq!(state.score(), 1);
        let food = state.food().unwrap();
        assert!(!state.snake().occupies(&food));
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut rng = SessionRng::new(1);
        let mut state =
            SnakeGameState::from_parts(&points(&[(7, 7), (6, 7)]), Direction::Right, Some(Point::new(0, 0)));
        state.set_direction(Direction::Left);
        assert_eq!(state.pending_direction(), None);
        state.update(&mut rng);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.snake().head(), Point::new(8, 7));
    }

    #[test]
    fn test_latest_pending_direction_wins() {
        let mut rng = SessionRng::new(1);
        let mut state =
            SnakeGameState::from_parts(&points(&[(7, 7), (6, 7)]), Direction::Right, Some(Point::new(0, 0)));
        state.set_direction(Direction::Up);
        state.set_direction(Direction::Down);
        state.update(&mut rng);
        assert_eq!(state.direction(), Direction::Down);
        assert_eq!(state.snake().head(), Point::new(7, 8));
    }

    #[test]
    fn test_reversal_is_checked_against_committed_direction() {
        let mut rng = SessionRng::new(1);
        let mut state =
            SnakeGameState::from_parts(&points(&[(7, 7), (6, 7)]), Direction::Right, Some(Point::new(0, 0)));
        state.set_direction(Direction::Up);
        // Still moving right until the next tick, so Left is a reversal.
        state.set_direction(Direction::Left);
        assert_eq!(state.pending_direction(), Some(Direction::Up));

        state.update(&mut rng);
        state.set_direction(Direction::Down);
        assert_eq!(state.pending_direction(), None);
        state.set_direction(Direction::Left);
        assert_eq!(state.pending_direction(), Some(Direction::Left));
    }

    #[test]
    fn test_over_state_is_frozen() {
        let mut rng = SessionRng::new(1);
        let start = points(&[(5, 6), (6, 6), (6, 7), (5, 7)]);
        let mut state = SnakeGameState::from_parts(&start, Direction::Down, Some(Point::new(0, 0)));
        state.update(&mut rng);
        assert!(state.is_over());

        state.set_direction(Direction::Left);
        assert_eq!(state.pending_direction(), None);
        assert_eq!(state.update(&mut rng), TickOutcome::Frozen);
        assert_eq!(body(&state), start);
    }

    #[test]
    fn test_reset_restores_template() {
        let mut rng = SessionRng::new(5);
        let mut state =
            SnakeGameState::from_parts(&points(&[(7, 7), (6, 7)]), Direction::Right, Some(Point::new(8, 7)));
        state.update(&mut rng);
        state.set_direction(Direction::Up);
        state.reset(&mut rng);

        assert_eq!(body(&state), points(&[(7, 7), (6, 7)]));
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.pending_direction(), None);
        assert_eq!(state.score(), 0);
        assert!(!state.is_over());
    }

    #[test]
    fn test_filling_board_leaves_no_food() {
        let mut rng = SessionRng::new(9);
        let path = serpentine();
        let last = *path.last().unwrap();
        let snake_body: Vec<Point> = path[..path.len() - 1].iter().rev().copied().collect();
        let mut state = SnakeGameState::from_parts(&snake_body, Direction::Right, Some(last));

        assert_eq!(state.update(&mut rng), TickOutcome::Ate { score: 1 });
        assert_eq!(state.snake().len(), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(state.food(), None);
        assert!(matches!(state.update(&mut rng), TickOutcome::Collided { .. }));
    }

    #[test]
    fn test_random_play_preserves_invariants() {
        let mut rng = SessionRng::new(2024);
        let mut input_rng = SessionRng::new(77);
        let mut state = SnakeGameState::new(&mut rng);
        let directions = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

        for _ in 0..5000 {
            if input_rng.random_range(0..3) == 0 {
                state.set_direction(directions[input_rng.random_range(0..4)]);
            }

            let len_before = state.snake().len();
            let score_before = state.score();
            let food_before = state.food();

            match state.update(&mut rng) {
                TickOutcome::Collided { score } => {
                    assert_eq!(score, score_before);
                    assert_eq!(state.snake().len(), len_before);
                    state.reset(&mut rng);
                    continue;
                }
                TickOutcome::Frozen => panic!("running game reported frozen"),
                TickOutcome::Ate { score } => {
                    assert_eq!(food_before, Some(state.snake().head()));
                    assert_eq!(score, score_before + 1);
                    assert_eq!(state.snake().len(), len_before + 1);
                }
                TickOutcome::Moved => {
                    assert_ne!(food_before, Some(state.snake().head()));
                    assert_eq!(state.score(), score_before);
                    assert_eq!(state.snake().len(), len_before);
                }
            }

            let distinct: HashSet<Point> = state.snake().segments().copied().collect();
            assert_eq!(distinct.len(), state.snake().len());
            if let Some(food) = state.food() {
                assert!(!state.snake().occupies(&food));
            }
        }
    }
}
