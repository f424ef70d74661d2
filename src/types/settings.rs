use serde::{Deserialize, Serialize};

/// Top-level session settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionSettings {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub downloads: DownloadSettings,
    #[serde(default)]
    pub overlay: OverlaySettings,
}

/// General browsing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// Location the home button and the home screen represent.
    pub home_url: String,
    /// Location seeded into a tab opened without a URL.
    pub blank_url: String,
    /// Title shown for a tab that has not finished a navigation yet.
    pub new_tab_title: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            home_url: "about:home".to_string(),
            blank_url: "about:blank".to_string(),
            new_tab_title: "New Tab".to_string(),
        }
    }
}

/// Download interception settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadSettings {
    /// Case-sensitive URL prefixes that are captured as downloads.
    pub intercept_prefixes: Vec<String>,
    /// Subdirectory of the documents root holding downloaded artifacts.
    pub directory_name: String,
    /// The only file extension accepted for a downloaded artifact.
    pub allowed_extension: String,
    /// Name used when nothing else yields a filename.
    pub default_filename: String,
    pub user_agent: String,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            intercept_prefixes: Vec::new(),
            directory_name: "downloads".to_string(),
            allowed_extension: ".zip".to_string(),
            default_filename: "download.zip".to_string(),
            user_agent: format!("seedbrowser/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Overlay panel animation and gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlaySettings {
    /// Duration of the entrance and dismiss animations, in milliseconds.
    pub animation_ms: u64,
    /// Downward drag distance, in pixels, that commits a dismiss on release.
    pub dismiss_threshold: f32,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            animation_ms: 250,
            dismiss_threshold: 120.0,
        }
    }
}
