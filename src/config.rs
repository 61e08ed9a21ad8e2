use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::constants::DEFAULT_SEED_PATH;
use crate::feed::RankingWeights;
use crate::gamification::GamificationRules;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to read ranking config {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse ranking config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Optional TOML overrides for ranking weights and gamification thresholds.
///
/// ```toml
/// [ranking]
/// trending_like = 1
/// trending_comment = 3
///
/// [gamification]
/// level_span = 25
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RankingFile {
    pub ranking: RankingWeights,
    pub gamification: GamificationRules,
}

impl RankingFile {
    /// Load the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web Server
    pub web_host: String,
    pub web_port: u16,

    // Data
    pub seed_path: PathBuf,
    pub ranking_config_path: Option<PathBuf>,

    // Feed
    pub ranking: RankingWeights,
    pub gamification: GamificationRules,
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub local_events_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_host: "0.0.0.0".to_string(),
            web_port: 8080,
            seed_path: PathBuf::from(DEFAULT_SEED_PATH),
            ranking_config_path: None,
            ranking: RankingWeights::default(),
            gamification: GamificationRules::default(),
            default_page_size: 20,
            max_page_size: 100,
            local_events_limit: 3,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Ranking weights start from built-in defaults, are overlaid by the
    /// TOML file at `RANKING_CONFIG_PATH` and finally by the individual
    /// `*_WEIGHT` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable or the ranking file is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let ranking_config_path = optional_env("RANKING_CONFIG_PATH").map(PathBuf::from);
        let file = match &ranking_config_path {
            Some(path) => RankingFile::load(path)?,
            None => RankingFile::default(),
        };

        Ok(Self {
            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,

            // Data
            seed_path: PathBuf::from(env_or_default("SEED_PATH", DEFAULT_SEED_PATH)),
            ranking_config_path,

            // Feed
            ranking: RankingWeights {
                trending_like: parse_env_u64("TRENDING_LIKE_WEIGHT", file.ranking.trending_like)?,
                trending_comment: parse_env_u64(
                    "TRENDING_COMMENT_WEIGHT",
                    file.ranking.trending_comment,
                )?,
                popular_like: parse_env_u64("POPULAR_LIKE_WEIGHT", file.ranking.popular_like)?,
                popular_comment: parse_env_u64(
                    "POPULAR_COMMENT_WEIGHT",
                    file.ranking.popular_comment,
                )?,
            },
            gamification: file.gamification,
            default_page_size: parse_env_usize("DEFAULT_PAGE_SIZE", 20)?,
            max_page_size: parse_env_usize("MAX_PAGE_SIZE", 100)?,
            local_events_limit: parse_env_usize("LOCAL_EVENTS_LIMIT", 3)?,
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(invalid("DEFAULT_PAGE_SIZE", "must be at least 1"));
        }
        if self.max_page_size == 0 {
            return Err(invalid("MAX_PAGE_SIZE", "must be at least 1"));
        }
        if self.default_page_size > self.max_page_size {
            return Err(invalid("DEFAULT_PAGE_SIZE", "cannot exceed MAX_PAGE_SIZE"));
        }
        if self.local_events_limit == 0 {
            return Err(invalid("LOCAL_EVENTS_LIMIT", "must be at least 1"));
        }
        if self.ranking.trending_like == 0 && self.ranking.trending_comment == 0 {
            return Err(invalid(
                "TRENDING_LIKE_WEIGHT",
                "trending likes and comments weights cannot both be zero",
            ));
        }
        if self.ranking.popular_like == 0 && self.ranking.popular_comment == 0 {
            return Err(invalid(
                "POPULAR_LIKE_WEIGHT",
                "popular likes and comments weights cannot both be zero",
            ));
        }
        if self.gamification.level_span == 0 {
            return Err(invalid("gamification.level_span", "must be at least 1"));
        }
        if self.gamification.weekly_goal == 0 {
            return Err(invalid("gamification.weekly_goal", "must be at least 1"));
        }
        Ok(())
    }

    /// Page size for a request, falling back to the default and capped at the maximum.
    #[must_use]
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        requested
            .filter(|n| *n > 0)
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size)
    }
}

fn invalid(name: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        message: message.to_string(),
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.trim().parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.trim().parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_usize(name: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.trim().parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}
