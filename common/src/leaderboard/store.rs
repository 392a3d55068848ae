use crate::defaults::{LEADERBOARD_CAPACITY, LEADERBOARD_KEY};
use crate::storage::{JsonCodec, KeyValueStore, TextCodec};
use crate::{log, log_warn};
use super::entry::LeaderboardEntry;

/// Top scores kept in memory and mirrored to a key-value store as JSON.
pub struct LeaderboardStore<TStore: KeyValueStore> {
    store: TStore,
    entries: Vec<LeaderboardEntry>,
}

impl<TStore: KeyValueStore> LeaderboardStore<TStore> {
    /// Never fails: missing or unreadable data gives an empty leaderboard.
    pub fn load(store: TStore) -> Self {
        let entries = match store.get(LEADERBOARD_KEY) {
            Ok(Some(content)) => match TextCodec::<Vec<LeaderboardEntry>>::decode(&JsonCodec, &content) {
                Ok(stored) => {
                    // Hand-edited records get the same name rules as fresh submissions.
                    let mut entries: Vec<LeaderboardEntry> = stored
                        .into_iter()
                        .map(|entry| LeaderboardEntry::new(&entry.name, entry.score))
                        .collect();
                    rank(&mut entries);
                    entries
                }
                Err(e) => {
                    log_warn!("Ignoring unreadable leaderboard: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log_warn!("Failed to read leaderboard: {}", e);
                Vec::new()
            }
        };

        Self { store, entries }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// True if `score` would currently earn a place on the board.
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < LEADERBOARD_CAPACITY
            || self.entries.last().is_some_and(|lowest| score > lowest.score)
    }

    pub fn submit(&mut self, raw_name: &str, score: u32) -> &[LeaderboardEntry] {
        let entry = LeaderboardEntry::new(raw_name, score);
        log!("Recording score {} for {}", entry.score, entry.name);

        self.entries.push(entry);
        rank(&mut self.entries);
        self.persist();

        &self.entries
    }

    fn persist(&self) {
        let encoded = match JsonCodec.encode(&self.entries) {
            Ok(encoded) => encoded,
            Err(e) => {
                log_warn!("Failed to encode leaderboard: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(LEADERBOARD_KEY, &encoded) {
            log_warn!("Failed to save leaderboard: {}", e);
        }
    }
}

/// Stable sort keeps earlier entries ahead of later ones with the same score.
fn rank(entries: &mut Vec<LeaderboardEntry>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(LEADERBOARD_CAPACITY);
}
