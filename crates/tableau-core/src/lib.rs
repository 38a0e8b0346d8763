//! Tableau Core - shared types for the Tableau viewer
//!
//! This crate provides the foundational types used by the other crates:
//! - Mathematical primitives (re-exported from glam)
//! - Transform for object placement
//! - Color for lighting and clear values
//! - Frame timing for the render loop

pub mod time;
pub mod types;

pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
pub use time::FrameTime;
pub use types::{Color, Transform};
