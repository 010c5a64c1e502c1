use super::*;
use crate::view::fake_view_test::{BODY, FakeView, MemoryStore};

fn page() -> FakeView {
    let view = FakeView::new();
    view.add(BODY, "button#theme-toggle");
    view
}

#[test]
fn first_visit_defaults_to_light() {
    let view = page();
    let store = MemoryStore::new();
    let ctl = ThemeController::init(&view, &store, &ThemeConfig::default()).unwrap();

    assert_eq!(view.attr(BODY, "data-theme").as_deref(), Some("light"));
    assert_eq!(ctl.current(&view), Theme::Light);
    assert!(store.load("theme").is_none());
}

#[test]
fn stored_preference_is_applied_on_init() {
    let view = page();
    let store = MemoryStore::with("theme", "dark");
    ThemeController::init(&view, &store, &ThemeConfig::default()).unwrap();
    assert_eq!(view.attr(BODY, "data-theme").as_deref(), Some("dark"));
}

#[test]
fn unknown_stored_value_falls_back_to_light() {
    let view = page();
    let store = MemoryStore::with("theme", "sepia");
    ThemeController::init(&view, &store, &ThemeConfig::default()).unwrap();
    assert_eq!(view.attr(BODY, "data-theme").as_deref(), Some("light"));
}

#[test]
fn toggle_updates_marker_and_storage_together() {
    let view = page();
    let store = MemoryStore::new();
    let ctl = ThemeController::init(&view, &store, &ThemeConfig::default()).unwrap();

    assert_eq!(ctl.toggle(&view, &store), Theme::Dark);
    assert_eq!(view.attr(BODY, "data-theme").as_deref(), Some("dark"));
    assert_eq!(store.load("theme").as_deref(), Some("dark"));

    assert_eq!(ctl.toggle(&view, &store), Theme::Light);
    assert_eq!(view.attr(BODY, "data-theme").as_deref(), Some("light"));
    assert_eq!(store.load("theme").as_deref(), Some("light"));
}

#[test]
fn preference_survives_reload() {
    let store = MemoryStore::new();
    {
        let view = page();
        let ctl = ThemeController::init(&view, &store, &ThemeConfig::default()).unwrap();
        ctl.toggle(&view, &store);
    }

    let reloaded = page();
    let ctl = ThemeController::init(&reloaded, &store, &ThemeConfig::default()).unwrap();
    assert_eq!(ctl.current(&reloaded), Theme::Dark);
}

#[test]
fn unrecognized_marker_toggles_to_light() {
    let view = page();
    let store = MemoryStore::new();
    let ctl = ThemeController::init(&view, &store, &ThemeConfig::default()).unwrap();
    view.set_attr(BODY, "data-theme", "sepia");

    assert_eq!(ctl.current(&view), Theme::Dark);
    assert_eq!(ctl.toggle(&view, &store), Theme::Light);
    assert_eq!(view.attr(BODY, "data-theme").as_deref(), Some("light"));
    assert_eq!(store.load("theme").as_deref(), Some("light"));
}

#[test]
fn blocked_storage_still_toggles_for_current_view() {
    let view = page();
    let store = MemoryStore::blocked();
    let ctl = ThemeController::init(&view, &store, &ThemeConfig::default()).unwrap();

    assert_eq!(ctl.toggle(&view, &store), Theme::Dark);
    assert_eq!(view.attr(BODY, "data-theme").as_deref(), Some("dark"));
    assert!(store.load("theme").is_none());
}

#[test]
fn missing_toggle_control_still_applies_theme() {
    let view = FakeView::new();
    let store = MemoryStore::with("theme", "dark");
    let ctl = ThemeController::init(&view, &store, &ThemeConfig::default()).unwrap();

    assert!(ctl.toggle_control().is_none());
    assert_eq!(view.attr(BODY, "data-theme").as_deref(), Some("dark"));
}

#[test]
fn missing_body_yields_no_controller() {
    let view = FakeView::without_body();
    let store = MemoryStore::new();
    assert!(ThemeController::init(&view, &store, &ThemeConfig::default()).is_none());
}

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}
