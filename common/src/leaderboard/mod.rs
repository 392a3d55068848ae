mod entry;
mod store;
mod submission;

pub use entry::{LeaderboardEntry, normalize_name};
pub use store::LeaderboardStore;
pub use submission::{ScoreSubmission, SubmissionPhase};
