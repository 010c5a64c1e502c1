//! Smooth scrolling for same-page fragment links.
//!
//! The destination is the target's document offset minus the height of the
//! fixed nav bar, measured at click time so responsive layout changes are
//! picked up.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

use crate::config::SmoothScrollConfig;
use crate::view::View;

/// What the browser layer should do with the click event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorClick {
    /// Leave the event alone (placeholder `#` link).
    FollowDefault,
    /// Cancel the native jump. `scrolled_to` is `None` when the fragment
    /// names no element.
    Prevented { scrolled_to: Option<f64> },
}

impl AnchorClick {
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Prevented { .. })
    }
}

/// Scroll destination for a target at `target_top` under a bar of
/// `nav_height`.
#[must_use]
pub fn destination(target_top: f64, nav_height: f64) -> f64 {
    target_top - nav_height
}

pub struct SmoothScroll<N> {
    links: Vec<N>,
    nav_selector: String,
}

impl<N: Clone> SmoothScroll<N> {
    pub fn bind<V: View<Node = N>>(view: &V, config: &SmoothScrollConfig) -> Self {
        Self {
            links: view.query_all(&config.link_selector),
            nav_selector: config.nav_selector.clone(),
        }
    }

    pub fn links(&self) -> &[N] {
        &self.links
    }

    pub fn on_click<V: View<Node = N>>(&self, view: &V, link: &N) -> AnchorClick {
        let Some(href) = view.attribute(link, "href") else {
            return AnchorClick::FollowDefault;
        };
        if href == "#" {
            return AnchorClick::FollowDefault;
        }

        let target_id = href.strip_prefix('#').unwrap_or(&href);
        let Some(target) = view.element_by_id(target_id) else {
            return AnchorClick::Prevented { scrolled_to: None };
        };

        let nav_height = view
            .query(&self.nav_selector)
            .map_or(0.0, |nav| view.offset_height(&nav));
        let top = destination(view.offset_top(&target), nav_height);
        view.scroll_to(top);
        AnchorClick::Prevented { scrolled_to: Some(top) }
    }
}
