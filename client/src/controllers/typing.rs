//! Typewriter reveal for the hero subtitle.
//!
//! The element's initial text is captured and cleared, then written back one
//! character per tick. Scheduling lives in the browser layer; this module
//! only advances the state.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use std::time::Duration;

use crate::config::TypingConfig;
use crate::view::View;

/// Progress through a string, one `char` at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), revealed: 0 }
    }

    /// Reveal the next character. `None` once everything is shown.
    pub fn advance(&mut self) -> Option<char> {
        let next = *self.chars.get(self.revealed)?;
        self.revealed += 1;
        Some(next)
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    #[must_use]
    pub fn shown(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }
}

pub struct TypingEffect<N> {
    node: N,
    writer: Typewriter,
    start_delay: Duration,
    interval: Duration,
}

impl<N: Clone> TypingEffect<N> {
    /// Capture and clear the subtitle. `None` when the page has none.
    pub fn start<V: View<Node = N>>(view: &V, config: &TypingConfig) -> Option<Self> {
        let node = view.element_by_id(&config.element_id)?;
        let writer = Typewriter::new(&view.text(&node));
        view.set_text(&node, "");
        Some(Self {
            node,
            writer,
            start_delay: Duration::from_millis(u64::from(config.start_delay_ms)),
            interval: Duration::from_millis(u64::from(config.char_interval_ms)),
        })
    }

    pub fn start_delay(&self) -> Duration {
        self.start_delay
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Write one more character. Returns `false` once the text is complete,
    /// at which point the caller stops scheduling ticks.
    pub fn tick<V: View<Node = N>>(&mut self, view: &V) -> bool {
        if self.writer.advance().is_none() {
            return false;
        }
        view.set_text(&self.node, &self.writer.shown());
        true
    }
}
