//! Frame timing for the render loop
//!
//! The windowing shell measures the raw time between frames and feeds it in
//! here; camera movement then scales by the clamped delta so displacement
//! stays frame-rate independent.

use serde::{Deserialize, Serialize};

/// Per-frame delta tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameTime {
    /// Delta time for this frame in seconds (clamped)
    pub delta_time: f32,
    /// Time since startup in seconds
    pub total_time: f64,
    /// Frame counter
    pub frame_count: u64,
    /// Maximum delta time, so a long stall does not teleport the camera
    pub max_delta_time: f32,
}

impl Default for FrameTime {
    fn default() -> Self {
        Self {
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
            max_delta_time: 0.25,
        }
    }
}

impl FrameTime {
    /// Create a frame timer with a custom delta clamp
    pub fn new(max_delta_time: f32) -> Self {
        Self {
            max_delta_time,
            ..Default::default()
        }
    }

    /// Update with the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        self.delta_time = raw_delta.clamp(0.0, self.max_delta_time);
        self.total_time += self.delta_time as f64;
        self.frame_count += 1;
    }
}
