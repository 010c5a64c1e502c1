//! Site configuration: the DOM contract, timings, and feature switches.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every selector, storage key and threshold the controllers depend on lives
//! here with its default. A page may override any subset by embedding a JSON
//! document in `<script type="application/json" id="site-config">`; fields
//! left out keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Id of the optional `<script>` element holding JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub mobile_menu: MobileMenuConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub reveal: RevealConfig,
    pub typing: TypingConfig,
    pub nav: NavConfig,
    pub projects: ProjectsConfig,
}

impl SiteConfig {
    /// Parse overrides from JSON. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `raw` is not a JSON object matching
    /// the config shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            attribute: "data-theme".to_owned(),
            toggle_id: "theme-toggle".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MobileMenuConfig {
    pub toggle_selector: String,
    pub panel_selector: String,
    pub active_class: String,
}

impl Default for MobileMenuConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".mobile-menu-toggle".to_owned(),
            panel_selector: ".mobile-menu".to_owned(),
            active_class: "active".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SmoothScrollConfig {
    pub link_selector: String,
    pub nav_selector: String,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            link_selector: "a[href^=\"#\"]".to_owned(),
            nav_selector: ".nav".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub visible_class: String,
    /// Fraction of the element that must be on screen, `0.0..=1.0`.
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".fade-in".to_owned(),
            visible_class: "visible".to_owned(),
            threshold: 0.1,
            root_margin: "0px".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TypingConfig {
    pub element_id: String,
    pub start_delay_ms: u32,
    pub char_interval_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            element_id: "typed-text".to_owned(),
            start_delay_ms: 500,
            char_interval_ms: 100,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavConfig {
    pub selector: String,
    pub shadow_threshold: f64,
    pub shadow: String,
    /// Slide the bar out of view while scrolling down.
    pub hide_on_scroll_down: bool,
    pub hide_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            selector: ".nav".to_owned(),
            shadow_threshold: 100.0,
            shadow: "var(--shadow-md)".to_owned(),
            hide_on_scroll_down: false,
            hide_threshold: 500.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectsConfig {
    pub enabled: bool,
    pub api_base: String,
    /// Bare GitHub login; anything else stops the loader.
    pub username: String,
    pub per_page: u32,
    pub grid_selector: String,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_base: "https://api.github.com".to_owned(),
            username: "Highsky7".to_owned(),
            per_page: 6,
            grid_selector: ".projects-grid".to_owned(),
        }
    }
}
