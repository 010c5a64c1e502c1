//! View binding between controller logic and the document.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers never touch `web-sys` directly. They read and mutate the page
//! through [`View`] and persist through [`PreferenceStore`], so the same
//! logic runs against the browser DOM (`dom::DomView`) and against the
//! in-memory fake used by unit tests.
//!
//! TRADE-OFFS
//! ==========
//! Mutating methods return nothing. Browser failures at this layer are
//! logged by the implementation; a cosmetic page script has no caller that
//! could recover from them.

#[cfg(test)]
#[path = "fake_view_test.rs"]
pub(crate) mod fake_view_test;

/// Read/write access to the rendered page.
pub trait View {
    /// Handle to a single element. Cheap to clone.
    type Node: Clone;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// First element matching `selector` in document order.
    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    /// Descendants of `scope` matching `selector`.
    fn query_within(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;
    fn body(&self) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    /// Flip `class` and return whether it is present afterwards.
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Set an inline style property. An empty `value` clears it.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Distance from the top of the document to the element, in CSS px.
    fn offset_top(&self, node: &Self::Node) -> f64;
    fn offset_height(&self, node: &Self::Node) -> f64;
    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;
    /// Animate the viewport towards `top`.
    fn scroll_to(&self, top: f64);

    fn create_element(&self, tag: &str) -> Option<Self::Node>;
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);
}

/// Origin-scoped key/value persistence.
///
/// Implementations swallow storage failures: a blocked store behaves like
/// one that never remembers anything.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}
