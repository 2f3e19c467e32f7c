use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Movement intent for the current frame, written by the host's game logic.
///
/// The y axis points up. A zero vector leaves the facing direction unchanged.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Movement {
    pub velocity: Vec2,
}

impl Movement {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            velocity: Vec2::new(x, y),
        }
    }
}
