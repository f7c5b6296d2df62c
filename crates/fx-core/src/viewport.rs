use glam::Vec2;

/// Pixel dimensions of a drawing surface.
///
/// Both sides are kept at least 1px so random placement ranges are never empty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// True if `p` lies within the viewport grown by `margin` on every side.
    #[inline]
    pub fn contains_with_margin(&self, p: Vec2, margin: f32) -> bool {
        p.x >= -margin
            && p.x <= self.width + margin
            && p.y >= -margin
            && p.y <= self.height + margin
    }
}

/// Whole-pixel canvas backing size for a window's inner size, at least 1x1.
#[inline]
pub fn backing_size(inner_width: f64, inner_height: f64) -> (u32, u32) {
    ((inner_width as u32).max(1), (inner_height as u32).max(1))
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
