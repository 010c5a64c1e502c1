use super::*;

#[test]
fn blank_input_yields_defaults() {
    let cfg = SiteConfig::from_json("  \n").unwrap();
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn defaults_match_page_contract() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.theme.storage_key, "theme");
    assert_eq!(cfg.theme.toggle_id, "theme-toggle");
    assert_eq!(cfg.mobile_menu.toggle_selector, ".mobile-menu-toggle");
    assert_eq!(cfg.mobile_menu.panel_selector, ".mobile-menu");
    assert_eq!(cfg.reveal.threshold, 0.1);
    assert_eq!(cfg.reveal.root_margin, "0px");
    assert_eq!(cfg.typing.start_delay_ms, 500);
    assert_eq!(cfg.typing.char_interval_ms, 100);
    assert_eq!(cfg.nav.shadow_threshold, 100.0);
    assert!(!cfg.nav.hide_on_scroll_down);
    assert!(!cfg.projects.enabled);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = SiteConfig::from_json(r#"{ "projects": { "enabled": true, "username": "octocat" } }"#)
        .unwrap();
    assert!(cfg.projects.enabled);
    assert_eq!(cfg.projects.username, "octocat");
    assert_eq!(cfg.projects.per_page, 6);
    assert_eq!(cfg.theme, ThemeConfig::default());
}

#[test]
fn malformed_json_is_rejected() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid site config"));
}

#[test]
fn wrong_field_type_is_rejected() {
    assert!(SiteConfig::from_json(r#"{ "typing": { "start_delay_ms": "soon" } }"#).is_err());
}
