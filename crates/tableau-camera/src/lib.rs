//! Tableau Camera - free-fly camera controller
//!
//! Maintains an orthonormal orientation basis from accumulated mouse,
//! keyboard, and scroll input, and derives the view transform on demand.
//! One instance is owned by the frame loop and threaded explicitly through
//! the input and render paths; there is no ambient global camera state.

mod config;
mod controller;

pub use config::CameraConfig;
pub use controller::{FlyCamera, MoveDirection};
