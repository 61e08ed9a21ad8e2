use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A named partition of posts used for scoping visibility.
///
/// Serialized as its tag string (`global`, `ward-1`, ...). Tags that are
/// neither `global` nor `ward-N` are kept verbatim (lowercased) as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Community {
    #[default]
    Global,
    Ward(u16),
    Other(String),
}

impl Community {
    /// Parse a community tag. Never fails.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim().to_lowercase();
        if tag == "global" {
            return Self::Global;
        }
        if let Some(number) = tag.strip_prefix("ward-") {
            if let Ok(n) = number.parse::<u16>() {
                return Self::Ward(n);
            }
        }
        Self::Other(tag)
    }

    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }
}

impl fmt::Display for Community {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::Ward(n) => write!(f, "ward-{n}"),
            Self::Other(tag) => f.write_str(tag),
        }
    }
}

impl From<String> for Community {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Community> for String {
    fn from(value: Community) -> Self {
        value.to_string()
    }
}

/// Post type as shown in the type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Text,
    Image,
    Video,
    Poll,
    Event,
    Job,
}

impl PostType {
    pub const ALL: [Self; 6] = [
        Self::Text,
        Self::Image,
        Self::Video,
        Self::Poll,
        Self::Event,
        Self::Job,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Poll => "poll",
            Self::Event => "event",
            Self::Job => "job",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to the author of a post or comment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A comment on a post. Only the count matters for ranking.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: String,
    pub author: Author,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PollOption {
    pub label: String,
    pub votes: u64,
}

/// Event payload. Every field may be absent in upstream data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDetails {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDetails {
    pub title: String,
    pub organization: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Type-specific payload of a post. The variant determines the post type, so
/// an event post always carries event details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PostKind {
    #[default]
    Text,
    Image,
    Video {
        #[serde(default)]
        url: Option<String>,
    },
    Poll {
        #[serde(default)]
        options: Vec<PollOption>,
    },
    Event(EventDetails),
    Job(JobDetails),
}

impl PostKind {
    #[must_use]
    pub fn post_type(&self) -> PostType {
        match self {
            Self::Text => PostType::Text,
            Self::Image => PostType::Image,
            Self::Video { .. } => PostType::Video,
            Self::Poll { .. } => PostType::Poll,
            Self::Event(_) => PostType::Event,
            Self::Job(_) => PostType::Job,
        }
    }

    #[must_use]
    pub fn event_details(&self) -> Option<&EventDetails> {
        match self {
            Self::Event(details) => Some(details),
            _ => None,
        }
    }
}

/// A post as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: Author,
    /// Body text; may be empty when images are attached.
    #[serde(default)]
    pub content: String,
    /// Image attachment URLs.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub community: Community,
    #[serde(default)]
    pub kind: PostKind,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    #[must_use]
    pub fn post_type(&self) -> PostType {
        self.kind.post_type()
    }

    #[must_use]
    pub fn comment_count(&self) -> u64 {
        self.comments.len() as u64
    }
}
