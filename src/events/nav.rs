use crate::constants::{ACTIVE_CLASS, ANCHOR_SELECTOR, MENU_TOGGLE_SELECTOR, NAV_LINKS_SELECTOR};
use crate::dom;
use web_sys as web;

const ARIA_EXPANDED: &str = "aria-expanded";

pub fn wire_mobile_menu(document: &web::Document) {
    let (Some(toggle), Some(nav)) = (
        dom::query_one(document, MENU_TOGGLE_SELECTOR),
        dom::query_one(document, NAV_LINKS_SELECTOR),
    ) else {
        return;
    };
    let toggle_click = toggle.clone();
    dom::listen(&toggle, "click", move |_: web::MouseEvent| {
        let expanded = toggle_click.get_attribute(ARIA_EXPANDED).as_deref() == Some("true");
        _ = toggle_click.set_attribute(ARIA_EXPANDED, if expanded { "false" } else { "true" });
        _ = nav.class_list().toggle(ACTIVE_CLASS);
    });
}

/// In-page anchors scroll smoothly and close the mobile menu.
pub fn wire_anchor_scroll(document: &web::Document) {
    let toggle = dom::query_one(document, MENU_TOGGLE_SELECTOR);
    let nav = dom::query_one(document, NAV_LINKS_SELECTOR);
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let href_el = anchor.clone();
        let toggle = toggle.clone();
        let nav = nav.clone();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            if let Some(target) = href_el
                .get_attribute("href")
                .and_then(|href| dom::query_one(&doc, &href))
            {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
            if let Some(nav) = &nav {
                if nav.class_list().contains(ACTIVE_CLASS) {
                    _ = nav.class_list().remove_1(ACTIVE_CLASS);
                    if let Some(toggle) = &toggle {
                        _ = toggle.set_attribute(ARIA_EXPANDED, "false");
                    }
                }
            }
        });
    }
}
