//! Page configuration.
//!
//! Every field has a default, so a page without a config block behaves
//! exactly like the stock landing page. A page can override any subset by
//! embedding JSON in `<script type="application/json" id="page-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::PageError;
use crate::preloader::PreloaderTiming;
use crate::reveal::RevealOptions;

/// Tunable values for the page behaviors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Name rendered in the footer attribution.
    pub owner: String,
    /// Storage key for the theme preference.
    pub theme_key: String,
    pub preloader_min_ms: u32,
    pub preloader_fade_ms: u32,
    pub ripple_ms: u32,
    pub bounce_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: u32,
    pub lazy_fallback_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            owner: consts::OWNER_NAME.to_owned(),
            theme_key: consts::THEME_STORAGE_KEY.to_owned(),
            preloader_min_ms: consts::PRELOADER_MIN_DISPLAY_MS,
            preloader_fade_ms: consts::PRELOADER_FADE_MS,
            ripple_ms: consts::RIPPLE_LIFETIME_MS,
            bounce_ms: consts::THEME_BOUNCE_MS,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_bottom_margin_px: consts::REVEAL_BOTTOM_MARGIN_PX,
            lazy_fallback_url: consts::LAZYSIZES_URL.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.reveal_threshold = if config.reveal_threshold.is_finite() {
            config.reveal_threshold.clamp(0.0, 1.0)
        } else {
            consts::REVEAL_THRESHOLD
        };
        Ok(config)
    }

    #[must_use]
    pub fn preloader_timing(&self) -> PreloaderTiming {
        PreloaderTiming { min_display_ms: self.preloader_min_ms, fade_ms: self.preloader_fade_ms }
    }

    #[must_use]
    pub fn reveal_options(&self) -> RevealOptions {
        RevealOptions { threshold: self.reveal_threshold, bottom_margin_px: self.reveal_bottom_margin_px }
    }

    /// Read the config block from the page, falling back to defaults.
    #[cfg(feature = "hydrate")]
    pub fn from_page(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(consts::PAGE_CONFIG_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default page config");
                Self::default()
            }
        }
    }
}
