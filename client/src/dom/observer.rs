//! `IntersectionObserver` wiring for the scroll-reveal controller.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{DomView, logged};
use crate::controllers::reveal::{Intersection, ScrollReveal};

/// Handle to the page's reveal observer. Clones share the same observer.
#[derive(Clone)]
pub struct RevealObserver {
    observer: IntersectionObserver,
}

impl RevealObserver {
    /// Create the observer and start watching every collected target.
    pub fn install(view: Rc<DomView>, reveal: ScrollReveal<Element>) -> Option<Self> {
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(reveal.options().threshold));
        options.set_root_margin(&reveal.options().root_margin);

        let targets = reveal.targets().to_vec();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let batch = entries.iter().filter_map(|value| {
                    match value.dyn_into::<IntersectionObserverEntry>() {
                        Ok(entry) => Some(Intersection {
                            target: entry.target(),
                            is_intersecting: entry.is_intersecting(),
                        }),
                        Err(_) => None,
                    }
                });
                let revealed = reveal.on_intersections(view.as_ref(), batch);
                if revealed > 0 {
                    log::debug!("revealed {revealed} element(s)");
                }
            },
        );

        let observer = logged(
            "IntersectionObserver",
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options),
        )?;
        callback.forget();

        let handle = Self { observer };
        handle.observe(&targets);
        Some(handle)
    }

    pub fn observe(&self, nodes: &[Element]) {
        for node in nodes {
            self.observer.observe(node);
        }
    }
}
