use fx_core::{Rgba, Surface, Viewport};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a 2D canvas context.
///
/// Fill and stroke styles are only re-sent when the color changes, since
/// consecutive particles frequently share one.
pub struct Canvas2dSurface {
    pub canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    fill: Option<Rgba>,
    stroke: Option<Rgba>,
    line_width: f32,
}

impl Canvas2dSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            canvas,
            ctx,
            fill: None,
            stroke: None,
            line_width: -1.0,
        })
    }

    /// Current backing-store size.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    /// Setting canvas width/height resets context state, so forget cached styles.
    pub fn invalidate_styles(&mut self) {
        self.fill = None;
        self.stroke = None;
        self.line_width = -1.0;
    }

    fn set_fill(&mut self, color: Rgba) {
        if self.fill != Some(color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.fill = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Rgba, width: f32) {
        if self.stroke != Some(color) {
            self.ctx.set_stroke_style_str(&color.to_css());
            self.stroke = Some(color);
        }
        if self.line_width != width {
            self.ctx.set_line_width(width as f64);
            self.line_width = width;
        }
    }
}

impl Surface for Canvas2dSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.set_fill(color);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn clear(&mut self, origin: Vec2, size: Vec2) {
        self.ctx
            .clear_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.set_stroke(color, width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.set_fill(color);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}
