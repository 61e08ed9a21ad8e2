use serde::Serialize;

use super::rules::GamificationRules;
use crate::model::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstPost,
    TrustedMember,
    CommunityLeader,
    PopularCreator,
    HelpfulMember,
    EarlyAdopter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub unlocked: bool,
}

/// The fixed achievement list, in display order, with unlock state for `user`.
#[must_use]
pub fn achievements(
    user: &UserProfile,
    authored_posts: usize,
    rules: &GamificationRules,
) -> Vec<Achievement> {
    let trust = user.trust_score;
    [
        (AchievementId::FirstPost, authored_posts > 0),
        (
            AchievementId::TrustedMember,
            trust >= rules.trusted_member_trust,
        ),
        (
            AchievementId::CommunityLeader,
            trust >= rules.community_leader_trust,
        ),
        (
            AchievementId::PopularCreator,
            user.followers >= rules.popular_creator_followers,
        ),
        (
            AchievementId::HelpfulMember,
            trust >= rules.helpful_member_trust,
        ),
        (AchievementId::EarlyAdopter, true),
    ]
    .into_iter()
    .map(|(id, unlocked)| Achievement { id, unlocked })
    .collect()
}

/// Profile badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Verified,
    TopContributor,
    VerifiedEducator,
    PopularCreator,
    TrustedMember,
    CommunityLeader,
    EarlyAdopter,
    HelpfulMember,
    TopTrust,
}

impl Badge {
    /// Badges the backend may grant by id.
    #[must_use]
    pub fn from_granted_id(id: &str) -> Option<Self> {
        match id {
            "top_contributor" => Some(Self::TopContributor),
            "verified_educator" => Some(Self::VerifiedEducator),
            "popular_creator" => Some(Self::PopularCreator),
            "trusted_member" => Some(Self::TrustedMember),
            "community_leader" => Some(Self::CommunityLeader),
            "early_adopter" => Some(Self::EarlyAdopter),
            "helpful_member" => Some(Self::HelpfulMember),
            _ => None,
        }
    }
}

/// `verified` first, then granted badges in profile order, then `top_trust`.
/// Unknown granted ids are skipped.
#[must_use]
pub fn badges(user: &UserProfile, rules: &GamificationRules) -> Vec<Badge> {
    let mut out = Vec::new();
    if user.is_verified {
        out.push(Badge::Verified);
    }
    for badge in user
        .achievements
        .iter()
        .filter_map(|id| Badge::from_granted_id(id))
    {
        if !out.contains(&badge) {
            out.push(badge);
        }
    }
    if user.trust_score >= rules.top_trust_badge {
        out.push(Badge::TopTrust);
    }
    out
}
