//! Reputation-derived progress: rank, levels, achievements, badges and streaks.
//!
//! All values are derived from the user's trust score, follower count and
//! activity dates; nothing here is persisted.

mod achievements;
mod progress;
mod rules;
mod streak;

pub use achievements::{achievements, badges, Achievement, AchievementId, Badge};
pub use progress::{
    followers_preview, rank, summarize, weekly_progress, LevelProgress, ProgressSummary,
};
pub use rules::GamificationRules;
pub use streak::login_streak;
