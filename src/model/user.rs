use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A community member's public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    /// Derived from `full_name` when the backend does not provide one.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub trust_score: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub is_verified: bool,
    pub joined_at: DateTime<Utc>,
    /// Badge ids granted by the backend (e.g. `top_contributor`).
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Days on which the user was active, used for the login streak.
    #[serde(default)]
    pub activity_dates: Vec<NaiveDate>,
}

impl UserProfile {
    /// Fill in `username` from the full name if it is blank.
    pub fn ensure_username(&mut self) {
        if self.username.trim().is_empty() {
            self.username = derive_username(&self.full_name);
        }
    }
}

/// Lowercase the full name and drop all whitespace.
#[must_use]
pub fn derive_username(full_name: &str) -> String {
    full_name.to_lowercase().split_whitespace().collect()
}
