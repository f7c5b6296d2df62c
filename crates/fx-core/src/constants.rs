use crate::surface::Rgba;

// Shared tuning constants for the particle fields and effects.

// Vortex (hero)
pub const VORTEX_PARTICLE_COUNT: usize = 400;
pub const VORTEX_SPEED_BASE: f32 = 15.0; // depth units per frame
pub const VORTEX_SPEED_JITTER: f32 = 5.0; // speed drawn from [base, base + jitter)
pub const VORTEX_FOCAL_LENGTH: f32 = 250.0;
pub const VORTEX_MAX_DEPTH: f32 = 2000.0; // spawn depth after recycle
pub const VORTEX_RECYCLE_DEPTH: f32 = 1.0; // recycle once z <= this
pub const VORTEX_MAX_STROKE: f32 = 3.0; // streak width right at the camera
pub const VORTEX_CULL_MARGIN: f32 = 50.0; // px outside the viewport before skipping draw

pub const VORTEX_COLOR_A: Rgba = Rgba::opaque(0xff, 0x2a, 0x2a); // red
pub const VORTEX_COLOR_B: Rgba = Rgba::opaque(0x2a, 0x8d, 0xff); // blue
pub const VORTEX_TRAIL_OVERLAY: Rgba = Rgba::new(2, 2, 5, 0.3);

// Network (background)
pub const NETWORK_NODE_COUNT: usize = 60;
pub const NETWORK_CONNECTION_DISTANCE: f32 = 150.0;
pub const NETWORK_MAX_SPEED: f32 = 0.25; // per-axis velocity in [-max, max)
pub const NETWORK_RADIUS_MIN: f32 = 1.0;
pub const NETWORK_RADIUS_MAX: f32 = 3.0;
pub const NETWORK_EDGE_WIDTH: f32 = 1.0;
pub const NETWORK_GRID_THRESHOLD: usize = 200; // above this node count use the spatial grid

pub const NETWORK_NODE_COLOR: Rgba = Rgba::opaque(0x33, 0x33, 0x33);
pub const NETWORK_EDGE_RGB: [u8; 3] = [50, 50, 50];

// Text scramble
pub const SCRAMBLE_GLYPHS: &str = "!<>-_\\/[]{}—=+*^?#________";
pub const SCRAMBLE_REVEAL_PER_TICK: f32 = 0.5;
pub const SCRAMBLE_TICK_MS: i32 = 30;

// Hover tilt
pub const TILT_MAX_DEG: f32 = 5.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

// UI beep
pub const BEEP_START_HZ: f32 = 800.0;
pub const BEEP_END_HZ: f32 = 300.0;
pub const BEEP_GAIN: f32 = 0.05;
pub const BEEP_GAIN_FLOOR: f32 = 0.001; // exponential ramps cannot reach zero
pub const BEEP_DURATION_SEC: f64 = 0.1;

// Tagline rotation
pub const TAGLINES: [&str; 4] = [
    "Where Intelligence Dominates",
    "Systems That Think",
    "Evolution Under Pressure",
    "Data > Instinct",
];
pub const TAGLINE_PERIOD_MS: i32 = 4000;
pub const TAGLINE_FADE_MS: i32 = 500;

// Contact form mock
pub const FORM_TRANSMIT_MS: i32 = 1500;
pub const FORM_MESSAGE_MS: i32 = 5000;
pub const FORM_BUSY_LABEL: &str = "Transmitting...";
