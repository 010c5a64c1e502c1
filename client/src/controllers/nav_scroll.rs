//! Navigation bar reaction to window scrolling.
//!
//! The bar gains a drop shadow once the page has scrolled past a threshold.
//! When `hide_on_scroll_down` is enabled it also slides out of view while
//! the user scrolls down deep into the page and returns on any upward
//! scroll.

#[cfg(test)]
#[path = "nav_scroll_test.rs"]
mod nav_scroll_test;

use crate::config::NavConfig;
use crate::view::View;

const HIDDEN: &str = "translateY(-100%)";
const SHOWN: &str = "translateY(0)";

pub struct NavScroll<N> {
    nav: N,
    last_scroll_y: f64,
    config: NavConfig,
}

impl<N: Clone> NavScroll<N> {
    /// `None` when the page has no nav bar.
    pub fn bind<V: View<Node = N>>(view: &V, config: &NavConfig) -> Option<Self> {
        let nav = view.query(&config.selector)?;
        Some(Self {
            nav,
            last_scroll_y: view.scroll_y(),
            config: config.clone(),
        })
    }

    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    pub fn on_scroll<V: View<Node = N>>(&mut self, view: &V) {
        let y = view.scroll_y();

        let shadow = if y > self.config.shadow_threshold {
            self.config.shadow.as_str()
        } else {
            "none"
        };
        view.set_style(&self.nav, "box-shadow", shadow);

        if self.config.hide_on_scroll_down {
            let hide = y > self.last_scroll_y && y > self.config.hide_threshold;
            view.set_style(&self.nav, "transform", if hide { HIDDEN } else { SHOWN });
        }

        self.last_scroll_y = y;
    }
}
