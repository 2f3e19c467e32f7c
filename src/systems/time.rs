//! Frame rate update.
//!
//! Updates the shared [`FrameRate`](crate::resources::framerate::FrameRate)
//! resource once per host frame, before the schedule runs.
use bevy_ecs::prelude::*;

use crate::resources::framerate::FrameRate;

/// Record the host's current target FPS and count the frame.
pub fn update_frame_rate(world: &mut World, target_fps: u32) {
    let mut rate = world.resource_mut::<FrameRate>();
    rate.target_fps = target_fps;
    rate.frame_count += 1;
}
