//! Shared constants used across the application.

/// Maximum number of images attached to a single post.
pub const MAX_DRAFT_IMAGES: usize = 4;

/// Maximum size of a single attached image (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Seed document used when `SEED_PATH` is not set.
pub const DEFAULT_SEED_PATH: &str = "./data/seed.json";
