use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::log;
use super::session::SnakeSession;
use super::types::TickOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver { score: u32 },
    Stopped { score: u32 },
}

/// Cancels the tick loop on `stop()` or when dropped.
pub struct TickHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    join: JoinHandle<SessionEnd>,
}

impl TickHandle {
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// `None` if the task panicked or was aborted.
    pub async fn wait(self) -> Option<SessionEnd> {
        self.join.await.ok()
    }
}

pub struct TickScheduler;

impl TickScheduler {
    /// Spawns the loop on the current tokio runtime. Panics outside of one.
    pub fn spawn(session: SnakeSession, period: Duration) -> TickHandle {
        Self::spawn_on(&tokio::runtime::Handle::current(), session, period)
    }

    pub fn spawn_on(
        runtime: &tokio::runtime::Handle,
        session: SnakeSession,
        period: Duration,
    ) -> TickHandle {
        let (stop_tx, stop_rx) = oneshot::channel();
        let join = runtime.spawn(Self::run(session, period, stop_rx));
        TickHandle {
            stop_tx: Some(stop_tx),
            join,
        }
    }

    pub async fn run(
        session: SnakeSession,
        period: Duration,
        mut stop_rx: oneshot::Receiver<()>,
    ) -> SessionEnd {
        let mut timer = interval(period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of a tokio interval fires immediately.
        timer.tick().await;

        log!("Tick loop started ({}ms)", period.as_millis());

        loop {
            tokio::select! {
                biased;

                _ = &mut stop_rx => {
                    let score = session.score();
                    log!("Tick loop stopped at score {}", score);
                    return SessionEnd::Stopped { score };
                }
                _ = timer.tick() => {
                    match session.tick() {
                        TickOutcome::Collided { score } => {
                            log!("Game over with score {}", score);
                            return SessionEnd::GameOver { score };
                        }
                        TickOutcome::Frozen => {
                            return SessionEnd::GameOver { score: session.score() };
                        }
                        TickOutcome::Moved | TickOutcome::Ate { .. } => {}
                    }
                }
            }
        }
    }
}
