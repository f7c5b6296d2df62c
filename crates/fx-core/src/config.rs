//! Field configuration.
//!
//! Defaults come from [`crate::constants`]; nothing is reconfigured at runtime,
//! but tests build smaller or stricter fields through these structs.

use crate::constants::*;
use crate::error::{ensure_positive, FxError, Result};
use crate::surface::Rgba;

#[derive(Clone, Debug)]
pub struct VortexConfig {
    pub particle_count: usize,
    pub speed_base: f32,
    pub speed_jitter: f32,
    pub focal_length: f32,
    pub max_depth: f32,
    pub recycle_depth: f32,
    pub max_stroke: f32,
    pub cull_margin: f32,
    pub color_a: Rgba,
    pub color_b: Rgba,
    pub trail_overlay: Rgba,
}

impl Default for VortexConfig {
    fn default() -> Self {
        Self {
            particle_count: VORTEX_PARTICLE_COUNT,
            speed_base: VORTEX_SPEED_BASE,
            speed_jitter: VORTEX_SPEED_JITTER,
            focal_length: VORTEX_FOCAL_LENGTH,
            max_depth: VORTEX_MAX_DEPTH,
            recycle_depth: VORTEX_RECYCLE_DEPTH,
            max_stroke: VORTEX_MAX_STROKE,
            cull_margin: VORTEX_CULL_MARGIN,
            color_a: VORTEX_COLOR_A,
            color_b: VORTEX_COLOR_B,
            trail_overlay: VORTEX_TRAIL_OVERLAY,
        }
    }
}

impl VortexConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("speed_base", self.speed_base)?;
        ensure_positive("focal_length", self.focal_length)?;
        ensure_positive("max_depth", self.max_depth)?;
        ensure_positive("recycle_depth", self.recycle_depth)?;
        if self.speed_jitter < 0.0 {
            return Err(FxError::InvalidRange {
                name: "speed",
                min: self.speed_base,
                max: self.speed_base + self.speed_jitter,
            });
        }
        if self.recycle_depth >= self.max_depth {
            return Err(FxError::DepthOrder {
                recycle: self.recycle_depth,
                max: self.max_depth,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct NetworkConfig {
    pub node_count: usize,
    pub connection_distance: f32,
    pub max_speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub edge_width: f32,
    pub grid_threshold: usize,
    pub node_color: Rgba,
    pub edge_rgb: [u8; 3],
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            node_count: NETWORK_NODE_COUNT,
            connection_distance: NETWORK_CONNECTION_DISTANCE,
            max_speed: NETWORK_MAX_SPEED,
            radius_min: NETWORK_RADIUS_MIN,
            radius_max: NETWORK_RADIUS_MAX,
            edge_width: NETWORK_EDGE_WIDTH,
            grid_threshold: NETWORK_GRID_THRESHOLD,
            node_color: NETWORK_NODE_COLOR,
            edge_rgb: NETWORK_EDGE_RGB,
        }
    }
}

impl NetworkConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("connection_distance", self.connection_distance)?;
        ensure_positive("max_speed", self.max_speed)?;
        ensure_positive("radius_min", self.radius_min)?;
        if self.radius_max <= self.radius_min {
            return Err(FxError::InvalidRange {
                name: "radius",
                min: self.radius_min,
                max: self.radius_max,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn edge_color(&self, opacity: f32) -> Rgba {
        let [r, g, b] = self.edge_rgb;
        Rgba::opaque(r, g, b).with_alpha(opacity)
    }
}
