//! Frame-loop style exercise of the camera controller

use glam::Vec3;
use tableau_camera::{CameraConfig, FlyCamera, MoveDirection};
use tableau_core::FrameTime;

#[test]
fn camera_survives_a_simulated_session() {
    let mut camera = FlyCamera::new(Vec3::new(0.0, 2.0, 2.0));
    camera.look_toward(Vec3::new(0.0, -1.0, -2.0));
    let mut time = FrameTime::default();

    // Mix of held keys, mouse sweeps, and scroll over many frames.
    for frame in 0..600 {
        time.update(0.016);
        camera.process_keyboard(MoveDirection::Forward, time.delta_time);
        if frame % 3 == 0 {
            camera.process_keyboard(MoveDirection::Left, time.delta_time);
        }
        if frame % 5 == 0 {
            camera.process_keyboard(MoveDirection::Up, time.delta_time);
        }
        camera.process_mouse_movement((frame % 17) as f32 - 8.0, (frame % 11) as f32 - 5.0);
        camera.process_mouse_scroll(if frame % 2 == 0 { 1.0 } else { -1.0 });

        let front = camera.front();
        let up = camera.up();
        let right = camera.right();
        assert!((front.length() - 1.0).abs() < 1e-4);
        assert!(front.dot(up).abs() < 1e-4);
        assert!(front.dot(right).abs() < 1e-4);
        assert!(up.dot(right).abs() < 1e-4);
        assert!(camera.zoom() >= camera.config.fov_min);
        assert!(camera.zoom() <= camera.config.fov_max);
        assert!(camera.pitch() >= camera.config.pitch_min);
        assert!(camera.pitch() <= camera.config.pitch_max);
    }

    assert_eq!(time.frame_count, 600);
    assert!(camera.position().is_finite());
}

#[test]
fn config_round_trips_through_json() {
    let config = CameraConfig {
        movement_speed: 4.0,
        ..CameraConfig::default()
    };
    let json = serde_json::to_string(&config).expect("serialize");
    let back: CameraConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.movement_speed, 4.0);
    assert_eq!(back.fov_max, config.fov_max);
    assert_eq!(back.world_up, config.world_up);
}
