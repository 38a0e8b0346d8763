//! Camera configuration

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Movement speed in world units per second
    pub movement_speed: f32,
    /// Mouse sensitivity in degrees per input unit
    pub mouse_sensitivity: f32,
    /// Minimum pitch angle in degrees
    pub pitch_min: f32,
    /// Maximum pitch angle in degrees
    pub pitch_max: f32,
    /// Minimum field-of-view angle in degrees (scroll zoom limit)
    pub fov_min: f32,
    /// Maximum field-of-view angle in degrees (scroll zoom limit)
    pub fov_max: f32,
    /// World up reference used to re-orthonormalize the basis
    pub world_up: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            pitch_min: -89.0,
            pitch_max: 89.0,
            fov_min: 1.0,
            fov_max: 45.0,
            world_up: Vec3::Y,
        }
    }
}
