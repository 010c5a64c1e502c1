//! Scroll-reveal: mark `.fade-in` elements visible once they enter view.
//!
//! Intersection itself is detected by the browser's `IntersectionObserver`;
//! this module only decides what to do with the entries it reports. The
//! reveal is one-way and elements stay observed, so repeated callbacks for
//! the same element are expected and harmless.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::RevealConfig;
use crate::view::View;

/// One observer report for one element.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection<N> {
    pub target: N,
    pub is_intersecting: bool,
}

/// Options passed to the platform observer.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

pub struct ScrollReveal<N> {
    targets: Vec<N>,
    visible_class: String,
    options: ObserverOptions,
}

impl<N: Clone> ScrollReveal<N> {
    pub fn collect<V: View<Node = N>>(view: &V, config: &RevealConfig) -> Self {
        Self {
            targets: view.query_all(&config.selector),
            visible_class: config.visible_class.clone(),
            options: ObserverOptions {
                threshold: config.threshold.clamp(0.0, 1.0),
                root_margin: config.root_margin.clone(),
            },
        }
    }

    /// Elements to hand to the observer.
    pub fn targets(&self) -> &[N] {
        &self.targets
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Apply an observer callback. Returns how many elements were newly
    /// revealed by this batch.
    pub fn on_intersections<V, I>(&self, view: &V, entries: I) -> usize
    where
        V: View<Node = N>,
        I: IntoIterator<Item = Intersection<N>>,
    {
        let mut revealed = 0;
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            if !view.has_class(&entry.target, &self.visible_class) {
                revealed += 1;
            }
            view.add_class(&entry.target, &self.visible_class);
        }
        revealed
    }
}
