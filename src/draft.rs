//! Post composition: validate a draft and turn it into a [`Post`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::constants::{MAX_DRAFT_IMAGES, MAX_IMAGE_BYTES};
use crate::model::{Author, Community, Post, PostKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("post must have text or at least one image")]
    Empty,
    #[error("at most {max} images may be attached, got {count}")]
    TooManyImages { count: usize, max: usize },
    #[error("image {index} is {size} bytes, limit is {max}")]
    ImageTooLarge { index: usize, size: u64, max: u64 },
}

impl DraftError {
    /// Stable machine-readable code for API responses.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty_post",
            Self::TooManyImages { .. } => "too_many_images",
            Self::ImageTooLarge { .. } => "image_too_large",
        }
    }
}

/// An image the client intends to upload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageAttachment {
    pub url: String,
    /// Declared size in bytes.
    #[serde(default)]
    pub size_bytes: u64,
}

/// A post being composed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PostDraft {
    pub content: String,
    pub community: Community,
    pub images: Vec<ImageAttachment>,
    pub kind: PostKind,
}

impl PostDraft {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_community(mut self, community: Community) -> Self {
        self.community = community;
        self
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>, size_bytes: u64) -> Self {
        self.images.push(ImageAttachment {
            url: url.into(),
            size_bytes,
        });
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: PostKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check the draft against the posting rules.
    ///
    /// # Errors
    ///
    /// Returns the first rule the draft breaks.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.content.trim().is_empty() && self.images.is_empty() {
            return Err(DraftError::Empty);
        }
        if self.images.len() > MAX_DRAFT_IMAGES {
            return Err(DraftError::TooManyImages {
                count: self.images.len(),
                max: MAX_DRAFT_IMAGES,
            });
        }
        if let Some((index, image)) = self
            .images
            .iter()
            .enumerate()
            .find(|(_, image)| image.size_bytes > MAX_IMAGE_BYTES)
        {
            return Err(DraftError::ImageTooLarge {
                index,
                size: image.size_bytes,
                max: MAX_IMAGE_BYTES,
            });
        }
        Ok(())
    }

    /// Validate and publish the draft as a new post.
    ///
    /// # Errors
    ///
    /// Returns a [`DraftError`] if the draft is not publishable.
    pub fn into_post(
        self,
        author: Author,
        id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Post, DraftError> {
        self.validate()?;
        Ok(Post {
            id: id.into(),
            author,
            content: self.content.trim().to_string(),
            images: self.images.into_iter().map(|image| image.url).collect(),
            community: self.community,
            kind: self.kind,
            created_at: now,
            likes: 0,
            comments: Vec::new(),
        })
    }
}
