use crate::constants::*;
use crate::dom;
use fx_core::constants::SCRAMBLE_TICK_MS;
use fx_core::ScrambleText;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Observe every match of `selector` and call `on_visible` the first time each
/// one intersects; the element is unobserved right after.
fn observe_once(
    document: &web::Document,
    selector: &str,
    init: &web::IntersectionObserverInit,
    mut on_visible: impl FnMut(web::Element) + 'static,
) -> anyhow::Result<usize> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver error: {:?}", e))?;
    callback.forget();

    let targets = dom::query_all(document, selector);
    for el in &targets {
        observer.observe(el);
    }
    Ok(targets.len())
}

/// Headings decode from random glyphs when first half visible.
pub fn wire_scramble(document: &web::Document) -> anyhow::Result<()> {
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(SCRAMBLE_VISIBLE_THRESHOLD));
    let count = observe_once(document, SCRAMBLE_SELECTOR, &init, |el| {
        spawn_local(run_scramble(el));
    })?;
    log::info!("[scramble] observing {}", count);
    Ok(())
}

async fn run_scramble(el: web::Element) {
    let Some(html) = el.dyn_ref::<web::HtmlElement>().cloned() else {
        return;
    };
    // Animate plain text, then put the original markup (colored spans) back.
    let original_html = el.inner_html();
    let mut scramble = ScrambleText::new(&html.inner_text());
    let mut rng = StdRng::from_entropy();
    loop {
        let frame = scramble.tick(&mut rng);
        if frame.done {
            el.set_inner_html(&original_html);
            break;
        }
        html.set_inner_text(&frame.text);
        dom::sleep_ms(SCRAMBLE_TICK_MS).await;
    }
}

/// Sections fade in once scrolled into view.
pub fn wire_reveal(document: &web::Document) -> anyhow::Result<()> {
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_VISIBLE_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let count = observe_once(document, REVEAL_SELECTOR, &init, |el| {
        _ = el.class_list().add_1(REVEAL_VISIBLE_CLASS);
    })?;
    log::info!("[reveal] observing {}", count);
    Ok(())
}
