use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::games::SessionRng;
use super::game_state::SnakeGameState;
use super::settings::SnakeSessionSettings;
use super::snapshot::SnakeSnapshot;
use super::types::{Direction, TickOutcome};

struct SessionCore {
    game_state: SnakeGameState,
    rng: SessionRng,
    tick: u64,
}

/// Shared handle to the single game of a player. Input handlers and the tick
/// loop both go through one lock, so a direction change never lands halfway
/// through a tick.
#[derive(Clone)]
pub struct SnakeSession {
    core: Arc<Mutex<SessionCore>>,
}

impl SnakeSession {
    pub fn create(settings: &SnakeSessionSettings) -> Self {
        Self::with_rng(SessionRng::from_optional_seed(settings.seed))
    }

    pub fn with_rng(mut rng: SessionRng) -> Self {
        let game_state = SnakeGameState::new(&mut rng);
        Self::from_state(game_state, rng)
    }

    pub(crate) fn from_state(game_state: SnakeGameState, rng: SessionRng) -> Self {
        Self {
            core: Arc::new(Mutex::new(SessionCore {
                game_state,
                rng,
                tick: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionCore> {
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_direction(&self, direction: Direction) {
        self.lock().game_state.set_direction(direction);
    }

    pub fn tick(&self) -> TickOutcome {
        let mut core = self.lock();
        let SessionCore { game_state, rng, tick } = &mut *core;
        let outcome = game_state.update(rng);
        if outcome != TickOutcome::Frozen {
            *tick += 1;
        }
        outcome
    }

    pub fn reset(&self) {
        let mut core = self.lock();
        let SessionCore { game_state, rng, tick } = &mut *core;
        game_state.reset(rng);
        *tick = 0;
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        let core = self.lock();
        core.game_state.snapshot(core.tick)
    }

    pub fn score(&self) -> u32 {
        self.lock().game_state.score()
    }

    pub fn is_over(&self) -> bool {
        self.lock().game_state.is_over()
    }

    pub fn seed(&self) -> u64 {
        self.lock().rng.seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::{GameStatus, Point};

    #[test]
    fn test_clones_share_state() {
        let state = SnakeGameState::from_parts(
            &[Point::new(7, 7), Point::new(6, 7)],
            Direction::Right,
            Some(Point::new(0, 0)),
        );
        let session = SnakeSession::from_state(state, SessionRng::new(11));
        let input = session.clone();
        input.set_direction(Direction::Down);
        assert_eq!(session.tick(), TickOutcome::Moved);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.head(), Some(Point::new(7, 8)));
        assert_eq!(snapshot.tick, 1);
        assert_eq!(input.snapshot(), snapshot);
    }

    #[test]
    fn test_reset_clears_tick_counter_and_status() {
        let state = SnakeGameState::from_parts(
            &[Point::new(5, 6), Point::new(6, 6), Point::new(6, 7), Point::new(5, 7)],
            Direction::Down,
            Some(Point::new(0, 0)),
        );
        let session = SnakeSession::from_state(state, SessionRng::new(3));
        assert_eq!(session.tick(), TickOutcome::Collided { score: 0 });
        assert_eq!(session.tick(), TickOutcome::Frozen);
        assert!(session.is_over());
        assert_eq!(session.snapshot().tick, 1);

        session.reset();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, GameStatus::Running);
        assert_eq!(snapshot.tick, 0);
        assert_eq!(snapshot.snake, vec![Point::new(7, 7), Point::new(6, 7)]);
    }

    #[test]
    fn test_create_honours_configured_seed() {
        let settings = SnakeSessionSettings {
            seed: Some(99),
            ..SnakeSessionSettings::default()
        };
        let a = SnakeSession::create(&settings);
        let b = SnakeSession::create(&settings);
        assert_eq!(a.seed(), 99);
        assert_eq!(a.snapshot().food, b.snapshot().food);
    }
}
