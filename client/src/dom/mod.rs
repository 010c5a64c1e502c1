//! Browser implementation of the view binding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. [`DomView`] maps the
//! [`View`] trait onto `web-sys` calls against the live document and
//! [`LocalStore`] maps [`PreferenceStore`] onto `localStorage`.
//!
//! ERROR HANDLING
//! ==============
//! DOM calls that can throw are routed through [`logged`], which records the
//! failure at warn level and carries on. Nothing here panics.

pub mod boot;
pub mod observer;
pub mod projects;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions,
    Storage, Window,
};

use crate::view::{PreferenceStore, View};

/// Unwrap a fallible DOM call, logging the failure.
pub(crate) fn logged<T>(op: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{op} failed: {err:?}");
            None
        }
    }
}

/// Attach `handler` to `target` for the lifetime of the page.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let added = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    if logged("addEventListener", added).is_some() {
        closure.forget();
    }
}

pub struct DomView {
    window: Window,
    document: Document,
}

impl DomView {
    /// `None` outside a browser window with a document.
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn elements(list: Option<NodeList>) -> Vec<Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect()
}

impl View for DomView {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        logged("querySelector", self.document.query_selector(selector)).flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        elements(logged("querySelectorAll", self.document.query_selector_all(selector)))
    }

    fn query_within(&self, scope: &Element, selector: &str) -> Vec<Element> {
        elements(logged("querySelectorAll", scope.query_selector_all(selector)))
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        logged("setAttribute", node.set_attribute(name, value));
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        logged("classList.add", node.class_list().add_1(class));
    }

    fn remove_class(&self, node: &Element, class: &str) {
        logged("classList.remove", node.class_list().remove_1(class));
    }

    fn toggle_class(&self, node: &Element, class: &str) -> bool {
        logged("classList.toggle", node.class_list().toggle(class)).unwrap_or(false)
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        let Some(html) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = html.style();
        if value.is_empty() {
            logged("style.removeProperty", style.remove_property(property));
        } else {
            logged("style.setProperty", style.set_property(property, value));
        }
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| f64::from(html.offset_top()))
    }

    fn offset_height(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| f64::from(html.offset_height()))
    }

    fn scroll_y(&self) -> f64 {
        logged("scrollY", self.window.scroll_y()).unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        logged("createElement", self.document.create_element(tag))
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        logged("appendChild", parent.append_child(child));
    }
}

/// `localStorage` for the page origin. Blocked storage is treated as absent.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new(window: &Window) -> Self {
        Self {
            storage: logged("localStorage", window.local_storage()).flatten(),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        logged("localStorage.getItem", storage.get_item(key)).flatten()
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            logged("localStorage.setItem", storage.set_item(key, value));
        }
    }
}
