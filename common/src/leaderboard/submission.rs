use crate::storage::KeyValueStore;
use super::entry::LeaderboardEntry;
use super::store::LeaderboardStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    AwaitingName { score: u32 },
    /// The game ended with nothing to record.
    Skipped,
    Submitted,
}

/// Post-game name prompt: at most one leaderboard write per finished game.
#[derive(Debug)]
pub struct ScoreSubmission {
    phase: SubmissionPhase,
}

impl Default for ScoreSubmission {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreSubmission {
    pub fn new() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_awaiting_name(&self) -> bool {
        matches!(self.phase, SubmissionPhase::AwaitingName { .. })
    }

    pub fn on_game_over(&mut self, score: u32) {
        if self.phase != SubmissionPhase::Idle {
            return;
        }
        self.phase = if score > 0 {
            SubmissionPhase::AwaitingName { score }
        } else {
            SubmissionPhase::Skipped
        };
    }

    pub fn submit<'a, TStore: KeyValueStore>(
        &mut self,
        name: &str,
        store: &'a mut LeaderboardStore<TStore>,
    ) -> Option<&'a [LeaderboardEntry]> {
        let SubmissionPhase::AwaitingName { score } = self.phase else {
            return None;
        };
        self.phase = SubmissionPhase::Submitted;
        Some(store.submit(name, score))
    }

    pub fn reset(&mut self) {
        self.phase = SubmissionPhase::Idle;
    }
}
