//! Application configuration.
//!
//! Values come from three layers, later layers winning:
//! built-in defaults, `$XDG_CONFIG_HOME/blogkit/config.json`, and the
//! environment (`ASSETS_PATH`, `POST_PATH`, `POST_LAYOUT`, `EXTRAS_ENABLED`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{BlogkitError, BlogkitResult};

pub const ENV_ASSETS_PATH: &str = "ASSETS_PATH";
pub const ENV_POST_PATH: &str = "POST_PATH";
pub const ENV_POST_LAYOUT: &str = "POST_LAYOUT";
pub const ENV_EXTRAS_ENABLED: &str = "EXTRAS_ENABLED";

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Site layout and feature switches.
    #[serde(default)]
    pub site: SiteConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where generated content lands inside the site, and which extras are on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Asset directory, relative to the site root.
    pub assets_dir: PathBuf,

    /// Default posts directory, relative to the site root.
    pub posts_dir: PathBuf,

    /// Front-matter layout used when a post names none.
    pub post_layout: String,

    /// Enables the `video`/`youtube` extras (video assets, YouTube rewriting).
    pub extras_enabled: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "blogkit=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            posts_dir: PathBuf::from("_posts"),
            post_layout: "post".to_string(),
            extras_enabled: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location and the process environment,
    /// falling back to defaults.
    pub fn load() -> Self {
        let mut config = Self::load_file();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Load only the config file, falling back to defaults.
    pub fn load_file() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Overlay environment values using the given lookup.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(assets) = lookup(ENV_ASSETS_PATH) {
            self.site.assets_dir = PathBuf::from(assets);
        }
        if let Some(posts) = lookup(ENV_POST_PATH) {
            self.site.posts_dir = PathBuf::from(posts);
        }
        if let Some(layout) = lookup(ENV_POST_LAYOUT) {
            self.site.post_layout = layout;
        }
        if let Some(flag) = lookup(ENV_EXTRAS_ENABLED) {
            self.site.extras_enabled = parse_flag(&flag);
        }
    }
}

/// `true`, `1` and `yes` (any case) enable a flag; everything else disables it.
pub fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Read a required environment variable.
pub fn require_env(key: &str) -> BlogkitResult<String> {
    std::env::var(key).map_err(|_| BlogkitError::missing_env(key))
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("blogkit").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_a_plain_jekyll_site() {
        let config = AppConfig::default();
        assert_eq!(config.site.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.site.posts_dir, PathBuf::from("_posts"));
        assert_eq!(config.site.post_layout, "post");
        assert!(!config.site.extras_enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let env: HashMap<&str, &str> = [
            (ENV_ASSETS_PATH, "static/media"),
            (ENV_POST_LAYOUT, "article"),
            (ENV_EXTRAS_ENABLED, "YES"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.site.assets_dir, PathBuf::from("static/media"));
        assert_eq!(config.site.posts_dir, PathBuf::from("_posts"));
        assert_eq!(config.site.post_layout, "article");
        assert!(config.site.extras_enabled);
    }

    #[test]
    fn flag_parsing_accepts_only_truthy_words() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(parse_flag("Yes"));
        assert!(!parse_flag("on"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn partial_config_file_fills_in_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"site":{"extras_enabled":true}}"#).unwrap();
        assert!(config.site.extras_enabled);
        assert_eq!(config.site.post_layout, "post");
        assert!(!config.logging.json);
    }

    #[test]
    fn require_env_reports_missing_key() {
        let err = require_env("BLOGKIT_TEST_SURELY_UNSET_VARIABLE").unwrap_err();
        assert!(matches!(err, BlogkitError::MissingEnv { ref key } if key == "BLOGKIT_TEST_SURELY_UNSET_VARIABLE"));
    }
}
