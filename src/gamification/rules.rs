use serde::{Deserialize, Serialize};

/// Thresholds behind levels, achievements and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamificationRules {
    /// Trust points per level.
    pub level_span: u32,
    pub weekly_goal: u32,
    pub helpful_member_trust: u32,
    pub trusted_member_trust: u32,
    pub community_leader_trust: u32,
    pub popular_creator_followers: u32,
    /// Trust score that earns the `top_trust` badge.
    pub top_trust_badge: u32,
    pub followers_preview_limit: usize,
}

impl Default for GamificationRules {
    fn default() -> Self {
        Self {
            level_span: 20,
            weekly_goal: 100,
            helpful_member_trust: 30,
            trusted_member_trust: 50,
            community_leader_trust: 80,
            popular_creator_followers: 100,
            top_trust_badge: 80,
            followers_preview_limit: 10,
        }
    }
}
