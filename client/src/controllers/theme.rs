//! Light/dark theme preference.
//!
//! Reads the preference from storage once at startup and mirrors it onto a
//! `data-theme` attribute on `<body>`. The toggle writes the new value to
//! both places.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. When it is blocked the toggle still works for the
//! current page view; the choice just does not survive a reload.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::config::ThemeConfig;
use crate::view::{PreferenceStore, View};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or rendered marker. Anything unrecognized is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

pub struct ThemeController<N> {
    body: N,
    toggle: Option<N>,
    config: ThemeConfig,
}

impl<N: Clone> ThemeController<N> {
    /// Apply the stored preference and resolve the toggle control.
    ///
    /// Returns `None` only when the document has no `<body>`.
    pub fn init<V, S>(view: &V, store: &S, config: &ThemeConfig) -> Option<Self>
    where
        V: View<Node = N>,
        S: PreferenceStore,
    {
        let body = view.body()?;
        let saved = store
            .load(&config.storage_key)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        view.set_attribute(&body, &config.attribute, saved.as_str());

        Some(Self {
            body,
            toggle: view.element_by_id(&config.toggle_id),
            config: config.clone(),
        })
    }

    /// The control the click listener belongs on, if the page has one.
    pub fn toggle_control(&self) -> Option<&N> {
        self.toggle.as_ref()
    }

    /// Theme currently shown on the page.
    ///
    /// Anything other than an explicit light marker reads as dark, so a
    /// toggle from an unrecognized marker always lands on light.
    pub fn current<V: View<Node = N>>(&self, view: &V) -> Theme {
        let marker = view.attribute(&self.body, &self.config.attribute);
        if marker.as_deref().and_then(Theme::parse) == Some(Theme::Light) {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Flip the displayed theme and persist the result.
    pub fn toggle<V, S>(&self, view: &V, store: &S) -> Theme
    where
        V: View<Node = N>,
        S: PreferenceStore,
    {
        let next = self.current(view).toggled();
        view.set_attribute(&self.body, &self.config.attribute, next.as_str());
        store.save(&self.config.storage_key, next.as_str());
        next
    }
}
