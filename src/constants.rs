// DOM hooks and front-end timing constants.
//
// Simulation tuning lives in `fx_core::constants`; this module only names
// the page elements the front end wires up and the browser-side knobs.

// Canvases
pub const VORTEX_CANVAS_ID: &str = "vortexCanvas";
pub const NETWORK_CANVAS_ID: &str = "networkCanvas";

// Text scramble
pub const SCRAMBLE_SELECTOR: &str = ".decode-effect";
pub const SCRAMBLE_VISIBLE_THRESHOLD: f64 = 0.5;

// Hover tilt + beep targets
pub const TILT_SELECTOR: &str = ".tilt-card, .service-col";
pub const BEEP_SELECTOR: &str = ".audio-hover, .tilt-card, .service-col";

// Navigation
pub const MENU_TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const ACTIVE_CLASS: &str = "active";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal-item";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_VISIBLE_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Tagline
pub const TAGLINE_ID: &str = "rotating-tagline";
pub const TAGLINE_TRANSITION: &str = "opacity 0.5s ease";

// Contact form
pub const FORM_ID: &str = "contact-form";
pub const FORM_MESSAGE_ID: &str = "form-message";
pub const HIDDEN_CLASS: &str = "hidden";
