//! Off-canvas mobile navigation and its hamburger icon.

#[cfg(test)]
#[path = "mobile_menu_test.rs"]
mod mobile_menu_test;

use crate::config::MobileMenuConfig;
use crate::view::View;

/// Inline styles for the three icon bars while the menu is open.
const OPEN_ICON: [(&str, &str); 3] = [
    ("transform", "rotate(45deg) translateY(8px)"),
    ("opacity", "0"),
    ("transform", "rotate(-45deg) translateY(-8px)"),
];

pub struct MobileMenu<N> {
    toggle: N,
    panel: N,
    links: Vec<N>,
    active_class: String,
}

impl<N: Clone> MobileMenu<N> {
    /// Resolve the toggle and panel. `None` when either is missing.
    pub fn bind<V: View<Node = N>>(view: &V, config: &MobileMenuConfig) -> Option<Self> {
        let toggle = view.query(&config.toggle_selector)?;
        let panel = view.query(&config.panel_selector)?;
        let links = view.query_within(&panel, "a");
        Some(Self {
            toggle,
            panel,
            links,
            active_class: config.active_class.clone(),
        })
    }

    pub fn toggle_control(&self) -> &N {
        &self.toggle
    }

    /// Links inside the panel; each one closes the menu when clicked.
    pub fn links(&self) -> &[N] {
        &self.links
    }

    pub fn is_open<V: View<Node = N>>(&self, view: &V) -> bool {
        view.has_class(&self.panel, &self.active_class)
    }

    /// Open or close the panel and return whether it is now open.
    pub fn on_toggle<V: View<Node = N>>(&self, view: &V) -> bool {
        let open = view.toggle_class(&self.panel, &self.active_class);
        self.paint_icon(view, open);
        open
    }

    /// Close the panel whatever its current state.
    pub fn on_link<V: View<Node = N>>(&self, view: &V) {
        view.remove_class(&self.panel, &self.active_class);
        self.paint_icon(view, false);
    }

    fn paint_icon<V: View<Node = N>>(&self, view: &V, open: bool) {
        let bars = view.query_within(&self.toggle, "span");
        for (bar, (property, value)) in bars.iter().zip(OPEN_ICON) {
            view.set_style(bar, property, if open { value } else { "" });
        }
    }
}
