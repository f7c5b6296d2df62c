pub mod beep;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod form;
pub mod grid;
pub mod network;
pub mod scramble;
pub mod surface;
pub mod tagline;
pub mod tilt;
pub mod viewport;
pub mod vortex;

pub use beep::*;
pub use config::*;
pub use error::*;
pub use field::*;
pub use form::*;
pub use network::*;
pub use scramble::*;
pub use surface::*;
pub use tagline::*;
pub use tilt::*;
pub use viewport::*;
pub use vortex::*;
