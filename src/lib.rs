#![cfg(target_arch = "wasm32")]
use fx_core::{Field, NetworkField, Viewport, VortexField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod ui;

use constants::{NETWORK_CANVAS_ID, VORTEX_CANVAS_ID};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_to_window(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_to_window(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Canvas + field for one animation, or `None` if the page lacks the canvas
/// or the browser lacks a 2D context.
fn build_layer(
    document: &web::Document,
    canvas_id: &str,
    name: &'static str,
    make_field: impl FnOnce(Viewport, u64) -> fx_core::Result<Box<dyn Field>>,
) -> Option<frame::Layer> {
    let Some(el) = document.get_element_by_id(canvas_id) else {
        log::info!("[{name}] no #{canvas_id}; skipping");
        return None;
    };
    let canvas = match el.dyn_into::<web::HtmlCanvasElement>() {
        Ok(c) => c,
        Err(_) => {
            log::warn!("[{name}] #{canvas_id} is not a canvas");
            return None;
        }
    };
    wire_canvas_resize(&canvas);
    let surface = match canvas::Canvas2dSurface::new(canvas) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("[{name}] {:?}; skipping", e);
            return None;
        }
    };
    let viewport = surface.viewport();
    match make_field(viewport, rand::random()) {
        Ok(field) => {
            log::info!("[{name}] started at {}x{}", viewport.width, viewport.height);
            Some(frame::Layer {
                name,
                field,
                surface,
            })
        }
        Err(e) => {
            log::error!("[{name}] config error: {e}");
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Particle layers share one requestAnimationFrame loop.
    let mut frame_ctx = frame::FrameContext::default();
    frame_ctx
        .layers
        .extend(build_layer(&document, VORTEX_CANVAS_ID, "vortex", |vp, seed| {
            VortexField::with_defaults(vp, seed).map(|f| Box::new(f) as Box<dyn Field>)
        }));
    frame_ctx
        .layers
        .extend(build_layer(&document, NETWORK_CANVAS_ID, "network", |vp, seed| {
            NetworkField::with_defaults(vp, seed).map(|f| Box::new(f) as Box<dyn Field>)
        }));
    if !frame_ctx.layers.is_empty() {
        frame::start_loop(Rc::new(RefCell::new(frame_ctx)));
    }

    let sound = Rc::new(RefCell::new(audio::SoundFx::default()));
    events::wire_audio_unlock(&document, sound.clone());
    events::wire_beep_hover(&document, sound);
    events::wire_tilt(&document);

    // Observers are optional polish; a browser without them still gets the rest.
    if let Err(e) = events::wire_scramble(&document) {
        log::warn!("{:?}", e);
    }
    if let Err(e) = events::wire_reveal(&document) {
        log::warn!("{:?}", e);
    }

    events::wire_mobile_menu(&document);
    events::wire_anchor_scroll(&document);
    ui::wire_tagline(&document);
    ui::wire_contact_form(&document);
    Ok(())
}
