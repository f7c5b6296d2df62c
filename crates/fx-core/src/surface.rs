//! Drawing abstraction shared by the particle fields.
//!
//! The fields only ever need four primitives, so the browser backend wraps a
//! `CanvasRenderingContext2d` and tests use [`RecordingSurface`] to inspect
//! what a frame would have drawn.

use glam::Vec2;

/// 8-bit RGB color with a floating-point alpha, matching CSS `rgba()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same color with a different alpha, clamped to \[0, 1\].
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS color string: `#rrggbb` when fully opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

pub trait Surface {
    /// Fill an axis-aligned rectangle. Used with a translucent color for trails.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    /// Reset the rectangle to fully transparent.
    fn clear(&mut self, origin: Vec2, size: Vec2);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// A single recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Rgba,
    },
    Clear {
        origin: Vec2,
        size: Vec2,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
}

/// Headless surface that keeps every draw call in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ops.push(DrawOp::FillRect {
            origin,
            size,
            color,
        });
    }

    fn clear(&mut self, origin: Vec2, size: Vec2) {
        self.ops.push(DrawOp::Clear { origin, size });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }
}
