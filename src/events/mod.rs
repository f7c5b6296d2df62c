pub mod nav;
pub mod observe;
pub mod pointer;

pub use nav::{wire_anchor_scroll, wire_mobile_menu};
pub use observe::{wire_reveal, wire_scramble};
pub use pointer::{wire_audio_unlock, wire_beep_hover, wire_tilt};
