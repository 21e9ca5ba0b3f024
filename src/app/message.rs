// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::ApiBackend;
use crate::ui::gallery;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// Hide the settings warning banner.
    DismissWarning,
}

impl From<gallery::Message> for Message {
    fn from(message: gallery::Message) -> Self {
        Message::Gallery(message)
    }
}

/// Runtime flags passed from the launcher to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Page size override for the photo listing.
    pub limit: Option<usize>,
    /// Listing backend override.
    pub backend: Option<ApiBackend>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
