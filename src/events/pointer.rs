use crate::audio::SoundFx;
use crate::constants::{BEEP_SELECTOR, TILT_SELECTOR};
use crate::dom;
use fx_core::Tilt;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// 3D hover tilt on cards.
pub fn wire_tilt(document: &web::Document) {
    for card in dom::query_all(document, TILT_SELECTOR) {
        let card_move = card.clone();
        dom::listen(&card, "mousemove", move |ev: web::MouseEvent| {
            let rect = card_move.get_bounding_client_rect();
            let x = ev.client_x() as f32 - rect.left() as f32;
            let y = ev.client_y() as f32 - rect.top() as f32;
            let tilt =
                Tilt::from_pointer_default(x, y, rect.width() as f32, rect.height() as f32);
            dom::set_style(&card_move, "transform", &tilt.css_transform());
        });

        let card_leave = card.clone();
        dom::listen(&card, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&card_leave, "transform", &Tilt::FLAT.css_transform());
        });
    }
}

/// Any click on the page may unlock audio.
pub fn wire_audio_unlock(document: &web::Document, sound: Rc<RefCell<SoundFx>>) {
    let Some(body) = document.body() else {
        return;
    };
    dom::listen(&body, "click", move |_: web::MouseEvent| {
        sound.borrow_mut().unlock();
    });
}

pub fn wire_beep_hover(document: &web::Document, sound: Rc<RefCell<SoundFx>>) {
    let targets = dom::query_all(document, BEEP_SELECTOR);
    log::info!("[audio] beep targets={}", targets.len());
    for el in targets {
        let sound = sound.clone();
        dom::listen(&el, "mouseenter", move |_: web::MouseEvent| {
            sound.borrow_mut().play_beep();
        });
    }
}
