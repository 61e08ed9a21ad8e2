use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::achievements::{achievements, badges, Achievement, Badge};
use super::rules::GamificationRules;
use super::streak::login_streak;
use crate::model::{Post, UserProfile};

/// Where a trust score sits within its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    /// 1-based level.
    pub level: u32,
    /// Trust score at which the next level starts.
    pub next_level_at: u32,
    /// Progress through the current level, 0..100.
    pub percent: u32,
}

impl LevelProgress {
    #[must_use]
    pub fn for_trust(trust: u32, level_span: u32) -> Self {
        let span = level_span.max(1);
        let level = trust / span + 1;
        Self {
            level,
            next_level_at: level.saturating_mul(span),
            percent: u32::try_from(u64::from(trust % span) * 100 / u64::from(span))
                .unwrap_or(0),
        }
    }
}

/// 1-based position of `user_id` among `users` ordered by trust score
/// (highest first, ties in input order).
#[must_use]
pub fn rank(users: &[UserProfile], user_id: &str) -> Option<usize> {
    let mut ordered: Vec<&UserProfile> = users.iter().collect();
    ordered.sort_by(|a, b| b.trust_score.cmp(&a.trust_score));
    ordered.iter().position(|u| u.id == user_id).map(|i| i + 1)
}

/// Points toward the weekly goal.
#[must_use]
pub fn weekly_progress(trust: u32, weekly_goal: u32) -> u32 {
    trust % weekly_goal.max(1)
}

/// Other members shown in the followers dialog.
#[must_use]
pub fn followers_preview<'a>(
    user: &UserProfile,
    users: &'a [UserProfile],
    rules: &GamificationRules,
) -> Vec<&'a UserProfile> {
    let limit = (user.followers as usize).min(rules.followers_preview_limit);
    users.iter().filter(|u| u.id != user.id).take(limit).collect()
}

/// Everything the progress panel shows for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub user_id: String,
    pub trust_score: u32,
    pub rank: Option<usize>,
    pub total_users: usize,
    pub level: LevelProgress,
    pub weekly_progress: u32,
    pub weekly_goal: u32,
    pub login_streak: u32,
    pub achievements: Vec<Achievement>,
    pub unlocked_achievements: usize,
    pub badges: Vec<Badge>,
    pub followers: u32,
    pub following: u32,
    pub joined_at: DateTime<Utc>,
}

#[must_use]
pub fn summarize(
    user: &UserProfile,
    users: &[UserProfile],
    posts: &[Post],
    today: NaiveDate,
    rules: &GamificationRules,
) -> ProgressSummary {
    let authored = posts.iter().filter(|p| p.author.id == user.id).count();
    let achievements = achievements(user, authored, rules);
    let unlocked_achievements = achievements.iter().filter(|a| a.unlocked).count();

    ProgressSummary {
        user_id: user.id.clone(),
        trust_score: user.trust_score,
        rank: rank(users, &user.id),
        total_users: users.len(),
        level: LevelProgress::for_trust(user.trust_score, rules.level_span),
        weekly_progress: weekly_progress(user.trust_score, rules.weekly_goal),
        weekly_goal: rules.weekly_goal,
        login_streak: login_streak(&user.activity_dates, today),
        achievements,
        unlocked_achievements,
        badges: badges(user, rules),
        followers: user.followers,
        following: user.following,
        joined_at: user.joined_at,
    }
}
