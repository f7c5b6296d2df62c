use crate::canvas::Canvas2dSurface;
use fx_core::Field;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One animated canvas: a field and the surface it draws into.
pub struct Layer {
    pub name: &'static str,
    pub field: Box<dyn Field>,
    pub surface: Canvas2dSurface,
}

impl Layer {
    pub fn frame(&mut self) {
        // The resize listener only touches the canvas; pick up the new bounds here.
        let vp = self.surface.viewport();
        if self.field.fit(vp) {
            log::info!("[{}] viewport {}x{}", self.name, vp.width, vp.height);
            self.surface.invalidate_styles();
        }
        self.field.tick(&mut self.surface);
    }
}

#[derive(Default)]
pub struct FrameContext {
    pub layers: Vec<Layer>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        for layer in &mut self.layers {
            layer.frame();
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
