use crate::constants::*;
use crate::dom;
use fx_core::constants::{FORM_MESSAGE_MS, FORM_TRANSMIT_MS, TAGLINE_FADE_MS, TAGLINE_PERIOD_MS};
use fx_core::{FormFlow, TaglineRotator};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Fade the hero tagline out, swap it, and fade back in every period.
pub fn wire_tagline(document: &web::Document) {
    let Some(el) = document.get_element_by_id(TAGLINE_ID) else {
        return;
    };
    dom::set_style(&el, "transition", TAGLINE_TRANSITION);
    spawn_local(async move {
        let mut rotator = TaglineRotator::default();
        dom::sleep_ms(TAGLINE_PERIOD_MS).await;
        loop {
            dom::set_style(&el, "opacity", "0");
            dom::sleep_ms(TAGLINE_FADE_MS).await;
            if let Some(line) = rotator.advance() {
                el.set_text_content(Some(line));
            }
            dom::set_style(&el, "opacity", "1");
            dom::sleep_ms(TAGLINE_PERIOD_MS - TAGLINE_FADE_MS).await;
        }
    });
}

/// Fake a network round trip for the contact form and flash a confirmation.
pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id(FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let message = document.get_element_by_id(FORM_MESSAGE_ID);
    let flow = Rc::new(RefCell::new(FormFlow::default()));
    let target = form.clone();

    dom::listen(&target, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let Some(button) = form
            .query_selector("button")
            .ok()
            .flatten()
            .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok())
        else {
            return;
        };
        let label = button.text_content().unwrap_or_default();
        let Some(started) = flow.borrow_mut().submit(&label) else {
            return;
        };
        button.set_text_content(Some(started.busy_label));
        button.set_disabled(true);
        log::info!("[form] submit #{}", started.ticket);

        let flow = flow.clone();
        let form = form.clone();
        let message = message.clone();
        spawn_local(async move {
            dom::sleep_ms(FORM_TRANSMIT_MS).await;
            let Some(restore) = flow.borrow_mut().transmitted(started.ticket) else {
                return;
            };
            button.set_text_content(Some(&restore));
            button.set_disabled(false);
            form.reset();
            if let Some(m) = &message {
                _ = m.class_list().remove_1(HIDDEN_CLASS);
            }

            dom::sleep_ms(FORM_MESSAGE_MS).await;
            if flow.borrow_mut().dismiss(started.ticket) {
                if let Some(m) = &message {
                    _ = m.class_list().add_1(HIDDEN_CLASS);
                }
            }
        });
    });
}
