//! Host frame rate resource.
//!
//! Players pace themselves against the host's *target* frames per second, not
//! against measured wall-clock time. The host updates this resource once per
//! frame through [`update_frame_rate`](crate::systems::time::update_frame_rate).
use bevy_ecs::prelude::Resource;

pub const DEFAULT_TARGET_FPS: u32 = 60;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRate {
    /// Frames per second the host is currently targeting.
    pub target_fps: u32,
    /// Host frames elapsed since startup.
    pub frame_count: u64,
}

impl Default for FrameRate {
    fn default() -> Self {
        FrameRate {
            target_fps: DEFAULT_TARGET_FPS,
            frame_count: 0,
        }
    }
}

impl FrameRate {
    pub fn with_target_fps(target_fps: u32) -> Self {
        FrameRate {
            target_fps,
            ..Default::default()
        }
    }
}
