//! Page startup: wait for the document, then register every controller.
//!
//! Registration order is fixed: theme, mobile menu, smooth scroll, reveal,
//! typing, nav scroll, then the optional project loader.

use std::cell::RefCell;
use std::rc::Rc;

use super::observer::RevealObserver;
use super::{DomView, LocalStore, listen};
use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::controllers::mobile_menu::MobileMenu;
use crate::controllers::nav_scroll::NavScroll;
use crate::controllers::reveal::ScrollReveal;
use crate::controllers::smooth_scroll::SmoothScroll;
use crate::controllers::theme::ThemeController;
use crate::controllers::typing::TypingEffect;
use crate::view::View;

/// Initialize now, or once `DOMContentLoaded` fires if the document is
/// still parsing.
pub fn run() {
    let Some(view) = DomView::new() else {
        log::warn!("no browser document; page scripts not started");
        return;
    };

    if view.document().ready_state() == "loading" {
        let target = view.document().clone();
        let mut pending = Some(view);
        listen(&target, "DOMContentLoaded", move |_| {
            if let Some(view) = pending.take() {
                init(view);
            }
        });
    } else {
        init(view);
    }
}

fn init(view: DomView) {
    let view = Rc::new(view);
    let config = load_config(&view);

    init_theme(&view, &config);
    init_mobile_menu(&view, &config);
    init_smooth_scroll(&view, &config);
    let reveal = ScrollReveal::collect(view.as_ref(), &config.reveal);
    let observer = RevealObserver::install(Rc::clone(&view), reveal);
    init_typing(&view, &config);
    init_nav_scroll(&view, &config);

    if config.projects.enabled {
        super::projects::spawn_loader(Rc::clone(&view), config.projects.clone(), observer);
    }

    log::info!("portfolio website initialized");
}

fn load_config(view: &DomView) -> SiteConfig {
    let Some(node) = view.element_by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&view.text(&node)) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using defaults");
            SiteConfig::default()
        }
    }
}

fn init_theme(view: &Rc<DomView>, config: &SiteConfig) {
    let store = LocalStore::new(view.window());
    let Some(theme) = ThemeController::init(view.as_ref(), &store, &config.theme) else {
        return;
    };
    let Some(toggle) = theme.toggle_control().cloned() else {
        return;
    };

    let view = Rc::clone(view);
    listen(&toggle, "click", move |_| {
        let next = theme.toggle(view.as_ref(), &store);
        log::debug!("theme switched to {}", next.as_str());
    });
}

fn init_mobile_menu(view: &Rc<DomView>, config: &SiteConfig) {
    let Some(menu) = MobileMenu::bind(view.as_ref(), &config.mobile_menu) else {
        return;
    };
    let menu = Rc::new(menu);

    {
        let view = Rc::clone(view);
        let menu_for_toggle = Rc::clone(&menu);
        listen(menu.toggle_control(), "click", move |_| {
            menu_for_toggle.on_toggle(view.as_ref());
        });
    }

    for link in menu.links() {
        let view = Rc::clone(view);
        let menu_for_link = Rc::clone(&menu);
        listen(link, "click", move |_| menu_for_link.on_link(view.as_ref()));
    }
}

fn init_smooth_scroll(view: &Rc<DomView>, config: &SiteConfig) {
    let scroll = Rc::new(SmoothScroll::bind(view.as_ref(), &config.smooth_scroll));
    for link in scroll.links() {
        let view = Rc::clone(view);
        let scroll_for_link = Rc::clone(&scroll);
        let anchor = link.clone();
        listen(link, "click", move |event| {
            if scroll_for_link.on_click(view.as_ref(), &anchor).prevents_default() {
                event.prevent_default();
            }
        });
    }
}

fn init_typing(view: &Rc<DomView>, config: &SiteConfig) {
    let Some(mut effect) = TypingEffect::start(view.as_ref(), &config.typing) else {
        return;
    };
    let view = Rc::clone(view);
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(effect.start_delay()).await;
        while effect.tick(view.as_ref()) {
            gloo_timers::future::sleep(effect.interval()).await;
        }
    });
}

fn init_nav_scroll(view: &Rc<DomView>, config: &SiteConfig) {
    let Some(nav) = NavScroll::bind(view.as_ref(), &config.nav) else {
        return;
    };
    let nav = RefCell::new(nav);
    let window = view.window().clone();
    let view = Rc::clone(view);
    listen(&window, "scroll", move |_| nav.borrow_mut().on_scroll(view.as_ref()));
}
