//! Warp-tunnel hero animation.
//!
//! Particles live in a camera space centred on the viewport: `x`/`y` are
//! signed offsets from the centre and `z` is depth. Every frame each particle
//! moves `speed` units towards the camera; once it passes `recycle_depth` it is
//! respawned far away. Drawing projects both the current and previous depth
//! through a pinhole camera so the segment between them reads as a streak.

use crate::config::VortexConfig;
use crate::error::Result;
use crate::field::Field;
use crate::surface::{Rgba, Surface};
use crate::viewport::Viewport;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleColor {
    A,
    B,
}

#[derive(Clone, Debug)]
pub struct VortexParticle {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub prev_z: f32,
    pub color: ParticleColor,
    pub speed: f32,
}

/// Screen-space segment for one particle, plus the head dot radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Streak {
    pub tail: Vec2,
    pub head: Vec2,
    pub width: f32,
}

impl Streak {
    #[inline]
    pub fn head_radius(&self) -> f32 {
        self.width * 0.5
    }
}

/// Pinhole projection of a camera-space offset at `depth`.
#[inline]
pub fn project(local: Vec2, depth: f32, focal_length: f32, center: Vec2) -> Vec2 {
    local / depth * focal_length + center
}

impl VortexParticle {
    fn spawn(config: &VortexConfig, viewport: Viewport, rng: &mut impl Rng) -> Self {
        let mut p = Self {
            x: 0.0,
            y: 0.0,
            z: config.max_depth,
            prev_z: config.max_depth,
            color: ParticleColor::A,
            speed: config.speed_base,
        };
        p.reset(config, viewport, rng, true);
        p
    }

    /// Re-randomize position, color and speed.
    ///
    /// The initial spawn scatters depth over `(0, max_depth]` so the tunnel is
    /// already full on the first frame; recycles always start at `max_depth`.
    pub fn reset(
        &mut self,
        config: &VortexConfig,
        viewport: Viewport,
        rng: &mut impl Rng,
        initial: bool,
    ) {
        self.x = rng.gen_range(-viewport.width..viewport.width);
        self.y = rng.gen_range(-viewport.height..viewport.height);
        self.z = if initial {
            config.max_depth * (1.0 - rng.gen::<f32>())
        } else {
            config.max_depth
        };
        self.prev_z = self.z;
        self.color = if rng.gen_bool(0.5) {
            ParticleColor::A
        } else {
            ParticleColor::B
        };
        self.speed = config.speed_base + rng.gen::<f32>() * config.speed_jitter;
    }

    /// Move towards the camera. Returns true if the particle was recycled.
    pub fn update(
        &mut self,
        config: &VortexConfig,
        viewport: Viewport,
        rng: &mut impl Rng,
    ) -> bool {
        self.prev_z = self.z;
        self.z -= self.speed;
        if self.z <= config.recycle_depth {
            self.reset(config, viewport, rng, false);
            return true;
        }
        false
    }

    #[inline]
    pub fn local(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Screen-space streak, or `None` when the head is culled.
    pub fn streak(&self, config: &VortexConfig, viewport: Viewport) -> Option<Streak> {
        let center = viewport.center();
        let head = project(self.local(), self.z, config.focal_length, center);
        if !viewport.contains_with_margin(head, config.cull_margin) {
            return None;
        }
        let tail = project(self.local(), self.prev_z, config.focal_length, center);
        let width = ((1.0 - self.z / config.max_depth) * config.max_stroke).max(0.0);
        Some(Streak { tail, head, width })
    }

    pub fn draw(&self, config: &VortexConfig, viewport: Viewport, surface: &mut dyn Surface) {
        let Some(streak) = self.streak(config, viewport) else {
            return;
        };
        let color = self.rgba(config);
        surface.stroke_line(streak.tail, streak.head, streak.width, color);
        surface.fill_circle(streak.head, streak.head_radius(), color);
    }

    #[inline]
    pub fn rgba(&self, config: &VortexConfig) -> Rgba {
        match self.color {
            ParticleColor::A => config.color_a,
            ParticleColor::B => config.color_b,
        }
    }
}

pub struct VortexField {
    pub config: VortexConfig,
    viewport: Viewport,
    particles: Vec<VortexParticle>,
    rng: StdRng,
    frames: u64,
    recycled: u64,
}

impl VortexField {
    pub fn new(config: VortexConfig, viewport: Viewport, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..config.particle_count)
            .map(|_| VortexParticle::spawn(&config, viewport, &mut rng))
            .collect::<Vec<_>>();
        log::debug!(
            "[vortex] particles={} viewport={}x{}",
            particles.len(),
            viewport.width,
            viewport.height
        );
        Ok(Self {
            config,
            viewport,
            particles,
            rng,
            frames: 0,
            recycled: 0,
        })
    }

    pub fn with_defaults(viewport: Viewport, seed: u64) -> Result<Self> {
        Self::new(VortexConfig::default(), viewport, seed)
    }

    pub fn particles(&self) -> &[VortexParticle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [VortexParticle] {
        &mut self.particles
    }

    /// Frames advanced so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Total recycles since construction.
    pub fn recycled(&self) -> u64 {
        self.recycled
    }

    /// Advance every particle once without drawing.
    pub fn step(&mut self) {
        let Self {
            config,
            viewport,
            particles,
            rng,
            frames,
            recycled,
        } = self;
        for p in particles.iter_mut() {
            if p.update(config, *viewport, rng) {
                *recycled += 1;
            }
        }
        *frames += 1;
    }
}

impl Field for VortexField {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        log::debug!("[vortex] resize {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    fn tick(&mut self, surface: &mut dyn Surface) {
        // Translucent overlay instead of a clear leaves fading trails behind.
        surface.fill_rect(Vec2::ZERO, self.viewport.size(), self.config.trail_overlay);
        let Self {
            config,
            viewport,
            particles,
            rng,
            frames,
            recycled,
        } = self;
        for p in particles.iter_mut() {
            if p.update(config, *viewport, rng) {
                *recycled += 1;
            }
            p.draw(config, *viewport, surface);
        }
        *frames += 1;
    }
}
