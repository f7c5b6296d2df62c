use crate::constants::{TILT_MAX_DEG, TILT_PERSPECTIVE_PX};

/// Card rotation in degrees around the screen X and Y axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Tilt for a pointer at (`x`, `y`) relative to a `width` x `height` box.
    ///
    /// The edge under the pointer tips away from the viewer by up to
    /// `max_deg`. A degenerate box yields [`Tilt::FLAT`].
    pub fn from_pointer(x: f32, y: f32, width: f32, height: f32, max_deg: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::FLAT;
        }
        let cx = width / 2.0;
        let cy = height / 2.0;
        Self {
            rotate_x: ((y - cy) / cy) * -max_deg,
            rotate_y: ((x - cx) / cx) * max_deg,
        }
    }

    pub fn from_pointer_default(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_pointer(x, y, width, height, TILT_MAX_DEG)
    }

    /// CSS `transform` value.
    pub fn css_transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            TILT_PERSPECTIVE_PX, self.rotate_x, self.rotate_y
        )
    }
}
