//! Page configuration.
//!
//! Every value has a built-in default matching the site's markup. A page may
//! override any subset by embedding JSON in
//! `<script type="application/json" id="site-config">`; missing sections and
//! fields keep their defaults.
//!
//! ```json
//! { "countdown": { "element_id": "easter-countdown", "target": { "month": 4, "day": 5 } },
//!   "snow": { "enabled": false } }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::countdown::AnnualDate;

/// Id of the `<script>` element holding configuration overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_MARKER_CLASS: &str = "dark-theme-active";
pub const DEFAULT_TOGGLE_CLASS: &str = "theme-toggle fixed bottom-4 right-4 bg-yellow-600 hover:bg-yellow-700 text-white p-3 rounded-full shadow-lg z-50";
pub const DEFAULT_TOGGLE_LABEL: &str = "Toggle dark mode";
pub const DEFAULT_COUNTDOWN_ELEMENT_ID: &str = "christmas-countdown";
pub const DEFAULT_COUNTDOWN_INTERVAL_MS: u32 = 1_000;
pub const DEFAULT_FADE_SELECTOR: &str = ".slide-up";
pub const DEFAULT_FADE_CLASS: &str = "fade-in";
pub const DEFAULT_FADE_THRESHOLD: f64 = 0.1;
pub const DEFAULT_SNOWFLAKE_COUNT: usize = 50;
pub const DEFAULT_BULLETIN_URL: &str = "https://foundryleader.com/nphweb/media/content/2439/2439857.htm";
pub const DEFAULT_BULLETIN_FILE_NAME: &str = "Weekly_Bulletin.txt";
pub const DEFAULT_BULLETIN_TRIGGER: &str = "[data-download-notes]";

/// Error returned by [`PageConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid countdown target: month {month}, day {day}")]
    InvalidTarget { month: u32, day: u32 },
    #[error("countdown interval must be at least 1 ms")]
    ZeroInterval,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme: ThemeConfig,
    pub countdown: CountdownConfig,
    pub fade: FadeConfig,
    pub snow: SnowConfig,
    pub bulletin: BulletinConfig,
}

impl PageConfig {
    /// Parse overrides from JSON, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or mistyped fields and
    /// [`ConfigError::InvalidTarget`] for a countdown date that does not occur
    /// every year, [`ConfigError::ZeroInterval`] for a zero tick interval.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        let target = cfg.countdown.target;
        if !target.is_valid() {
            return Err(ConfigError::InvalidTarget { month: target.month, day: target.day });
        }
        if cfg.countdown.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(cfg)
    }

    /// Like [`Self::from_json`], but logs the problem and falls back to defaults.
    #[must_use]
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|e| {
            log::error!("{e}; using default page config");
            Self::default()
        })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub marker_class: String,
    pub toggle_class: String,
    pub toggle_label: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
            toggle_class: DEFAULT_TOGGLE_CLASS.to_owned(),
            toggle_label: DEFAULT_TOGGLE_LABEL.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    pub element_id: String,
    pub target: AnnualDate,
    pub interval_ms: u32,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_COUNTDOWN_ELEMENT_ID.to_owned(),
            target: AnnualDate::CHRISTMAS,
            interval_ms: DEFAULT_COUNTDOWN_INTERVAL_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    pub selector: String,
    pub class: String,
    pub threshold: f64,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_FADE_SELECTOR.to_owned(),
            class: DEFAULT_FADE_CLASS.to_owned(),
            threshold: DEFAULT_FADE_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SnowConfig {
    pub enabled: bool,
    pub flakes: usize,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self { enabled: true, flakes: DEFAULT_SNOWFLAKE_COUNT }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BulletinConfig {
    pub url: String,
    pub file_name: String,
    pub trigger_selector: String,
}

impl Default for BulletinConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BULLETIN_URL.to_owned(),
            file_name: DEFAULT_BULLETIN_FILE_NAME.to_owned(),
            trigger_selector: DEFAULT_BULLETIN_TRIGGER.to_owned(),
        }
    }
}
