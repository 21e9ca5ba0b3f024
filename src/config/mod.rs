// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Photo listing backend, endpoint, image host and page size
//! - `[gallery]` - Masonry column count and image cache capacity
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_GALLERY_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Shape of the photo listing served by the remote API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApiBackend {
    /// Integer ids, album grouping and titles.
    #[default]
    JsonPlaceholder,
    /// String ids, authors and pixel dimensions.
    Picsum,
}

impl ApiBackend {
    /// Default listing base URL for this backend.
    pub fn default_endpoint(self) -> &'static str {
        match self {
            ApiBackend::JsonPlaceholder => JSONPLACEHOLDER_ENDPOINT,
            ApiBackend::Picsum => PICSUM_ENDPOINT,
        }
    }
}

impl fmt::Display for ApiBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiBackend::JsonPlaceholder => write!(f, "jsonplaceholder"),
            ApiBackend::Picsum => write!(f, "picsum"),
        }
    }
}

impl FromStr for ApiBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "jsonplaceholder" => Ok(ApiBackend::JsonPlaceholder),
            "picsum" => Ok(ApiBackend::Picsum),
            other => Err(format!("unknown backend: {}", other)),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Remote photo listing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Which listing shape to request and parse.
    #[serde(default)]
    pub backend: ApiBackend,

    /// Listing base URL. Defaults to the backend's public endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Host serving display and thumbnail images.
    #[serde(default = "default_image_base")]
    pub image_base: String,

    /// Page size of the listing request.
    #[serde(default = "default_limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend: ApiBackend::default(),
            endpoint: None,
            image_base: default_image_base(),
            limit: default_limit(),
        }
    }
}

impl ApiConfig {
    /// Listing base URL without trailing slash.
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.backend.default_endpoint())
            .trim_end_matches('/')
    }

    /// Image host without trailing slash.
    pub fn image_base(&self) -> &str {
        self.image_base.trim_end_matches('/')
    }

    /// Page size, clamped to the supported range.
    pub fn limit(&self) -> usize {
        clamp_limit(self.limit.unwrap_or(DEFAULT_PHOTO_LIMIT))
    }
}

/// Gallery layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Fixed masonry column count. `None` follows the window width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,

    /// Capacity of the full-resolution image cache. Thumbnails are not counted.
    #[serde(
        default = "default_image_cache_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_cache_entries: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: None,
            image_cache_entries: default_image_cache_entries(),
        }
    }
}

impl GalleryConfig {
    /// Fixed column count, clamped to the supported range.
    pub fn columns(&self) -> Option<usize> {
        self.columns.map(|c| c.clamp(MIN_COLUMNS, MAX_COLUMNS))
    }

    /// Image cache capacity, never zero.
    pub fn image_cache_entries(&self) -> usize {
        self.image_cache_entries
            .unwrap_or(DEFAULT_IMAGE_CACHE_ENTRIES)
            .max(1)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

/// Clamps a requested page size to the supported range.
pub fn clamp_limit(limit: usize) -> usize {
    limit.clamp(MIN_PHOTO_LIMIT, MAX_PHOTO_LIMIT)
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_image_base() -> String {
    DEFAULT_IMAGE_BASE.to_string()
}

fn default_limit() -> Option<usize> {
    Some(DEFAULT_PHOTO_LIMIT)
}

fn default_image_cache_entries() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_ENTRIES)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!("ignoring config at {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
