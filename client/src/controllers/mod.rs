//! Page behavior controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller owns the nodes it binds to and any state it needs between
//! events. None of them share state. The browser layer (`dom::boot`) builds
//! them in a fixed order, attaches listeners to the nodes they expose, and
//! forwards events into their handler methods.
//!
//! A controller whose required elements are missing is simply not built, so
//! pages without a mobile menu or typed subtitle still boot cleanly.

pub mod mobile_menu;
pub mod nav_scroll;
pub mod projects;
pub mod reveal;
pub mod smooth_scroll;
pub mod theme;
pub mod typing;
