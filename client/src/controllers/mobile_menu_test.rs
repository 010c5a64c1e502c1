use super::*;
use crate::view::fake_view_test::{BODY, FakeView};

struct Page {
    view: FakeView,
    panel: usize,
    bars: [usize; 3],
    links: Vec<usize>,
}

fn page() -> Page {
    let view = FakeView::new();
    let nav = view.add(BODY, "nav.nav");
    let toggle = view.add(nav, "button.mobile-menu-toggle");
    let bars = [view.add(toggle, "span"), view.add(toggle, "span"), view.add(toggle, "span")];
    let panel = view.add(nav, "div.mobile-menu");
    let links = vec![view.add(panel, "a"), view.add(panel, "a")];
    view.add(BODY, "a");
    Page { view, panel, bars, links }
}

#[test]
fn bind_collects_only_panel_links() {
    let p = page();
    let menu = MobileMenu::bind(&p.view, &MobileMenuConfig::default()).unwrap();
    assert_eq!(menu.links(), p.links.as_slice());
}

#[test]
fn missing_toggle_or_panel_disables_menu() {
    let view = FakeView::new();
    view.add(BODY, "div.mobile-menu");
    assert!(MobileMenu::bind(&view, &MobileMenuConfig::default()).is_none());

    let view = FakeView::new();
    view.add(BODY, "button.mobile-menu-toggle");
    assert!(MobileMenu::bind(&view, &MobileMenuConfig::default()).is_none());
}

#[test]
fn toggle_opens_menu_and_draws_cross() {
    let p = page();
    let menu = MobileMenu::bind(&p.view, &MobileMenuConfig::default()).unwrap();

    assert!(!menu.is_open(&p.view));
    assert!(menu.on_toggle(&p.view));
    assert!(p.view.classes(p.panel).contains(&"active".to_owned()));
    assert_eq!(
        p.view.style(p.bars[0], "transform").as_deref(),
        Some("rotate(45deg) translateY(8px)")
    );
    assert_eq!(p.view.style(p.bars[1], "opacity").as_deref(), Some("0"));
    assert_eq!(
        p.view.style(p.bars[2], "transform").as_deref(),
        Some("rotate(-45deg) translateY(-8px)")
    );
}

#[test]
fn second_toggle_closes_and_restores_bars() {
    let p = page();
    let menu = MobileMenu::bind(&p.view, &MobileMenuConfig::default()).unwrap();

    menu.on_toggle(&p.view);
    assert!(!menu.on_toggle(&p.view));
    assert!(!menu.is_open(&p.view));
    assert!(p.view.style(p.bars[0], "transform").is_none());
    assert!(p.view.style(p.bars[1], "opacity").is_none());
    assert!(p.view.style(p.bars[2], "transform").is_none());
}

#[test]
fn link_click_always_closes() {
    let p = page();
    let menu = MobileMenu::bind(&p.view, &MobileMenuConfig::default()).unwrap();

    menu.on_toggle(&p.view);
    menu.on_link(&p.view);
    assert!(!menu.is_open(&p.view));
    assert!(p.view.style(p.bars[1], "opacity").is_none());

    // Already closed: stays closed.
    menu.on_link(&p.view);
    assert!(!menu.is_open(&p.view));
}

#[test]
fn short_icon_styles_the_bars_it_has() {
    let view = FakeView::new();
    let toggle = view.add(BODY, "button.mobile-menu-toggle");
    let only = view.add(toggle, "span");
    view.add(BODY, "div.mobile-menu");
    let menu = MobileMenu::bind(&view, &MobileMenuConfig::default()).unwrap();

    assert!(menu.on_toggle(&view));
    assert_eq!(view.style(only, "transform").as_deref(), Some("rotate(45deg) translateY(8px)"));
}
