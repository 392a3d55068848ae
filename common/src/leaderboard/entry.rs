use serde::{Deserialize, Serialize};

use crate::defaults::{ANONYMOUS_NAME, MAX_NAME_LENGTH};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

impl LeaderboardEntry {
    pub fn new(raw_name: &str, score: u32) -> Self {
        Self {
            name: normalize_name(raw_name),
            score,
        }
    }
}

/// Trims the name, caps it at 16 characters and substitutes "Anonymous" when
/// nothing is left.
pub fn normalize_name(raw_name: &str) -> String {
    let trimmed = raw_name.trim();
    if trimmed.is_empty() {
        return ANONYMOUS_NAME.to_string();
    }
    trimmed.chars().take(MAX_NAME_LENGTH).collect()
}
