//! Loading posts and users from a JSON seed document.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::model::{Post, UserProfile};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Posts and users as stored in the seed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub posts: Vec<Post>,
    pub users: Vec<UserProfile>,
}

impl SeedData {
    /// Parse a seed document and fill in missing usernames.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut seed: Self = serde_json::from_str(json)?;
        for user in &mut seed.users {
            user.ensure_username();
        }
        Ok(seed)
    }

    #[must_use]
    pub fn user(&self, id: &str) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.id == id)
    }
}

/// Read the seed document at `path`. A missing file yields empty data.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub async fn load_seed(path: &Path) -> Result<SeedData, SourceError> {
    let json = match tokio::fs::read_to_string(path).await {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "Seed file not found, starting with an empty feed");
            return Ok(SeedData::default());
        }
        Err(source) => {
            return Err(SourceError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let seed = SeedData::from_json(&json).map_err(|source| SourceError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        posts = seed.posts.len(),
        users = seed.users.len(),
        "Loaded seed data"
    );
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_derives_usernames() {
        let seed = SeedData::from_json(
            r#"{"users":[{"id":"u1","full_name":"Nusrat Jahan","joined_at":"2024-01-01T00:00:00Z"}]}"#,
        )
        .unwrap();
        assert!(seed.posts.is_empty());
        assert_eq!(seed.users[0].username, "nusratjahan");
        assert!(seed.user("u1").is_some());
        assert!(seed.user("u2").is_none());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(SeedData::from_json("not json").is_err());
    }
}
