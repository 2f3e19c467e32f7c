//! Direction source: resolving movement into a compass clip.
//!
//! The host owns the blend state that turns a raw movement vector into one of
//! eight compass clip names (`"U"`, `"UR"`, `"R"`, `"DR"`, `"D"`, `"DL"`,
//! `"L"`, `"UL"`). The player only maps the resolved name to a
//! [`Direction`](crate::components::direction::Direction).
//!
//! [`CompassBlend`] is a ready-made 2D cartesian blend for hosts without one.

use std::f32::consts::FRAC_PI_4;

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Direction source collaborator.
pub trait DirectionController {
    /// Feed a non-zero movement vector into the blend parameters.
    fn set_movement(&mut self, movement: Vec2);
    /// Name of the compass clip the blend currently resolves to.
    fn current_clip(&self) -> &str;
}

/// Per-entity direction source used by
/// [`direction_from_movement`](crate::systems::direction::direction_from_movement).
#[derive(Component)]
pub struct DirectionSource(pub Box<dyn DirectionController + Send + Sync>);

impl DirectionSource {
    pub fn new(controller: impl DirectionController + Send + Sync + 'static) -> Self {
        Self(Box::new(controller))
    }
}

/// Compass clips counter-clockwise from +X, y axis pointing up.
const COMPASS: [&str; 8] = ["R", "UR", "U", "UL", "L", "DL", "D", "DR"];

/// Nearest-of-eight blend over the last non-zero movement vector.
///
/// Before any movement is fed in it resolves to `"D"`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompassBlend {
    x_dir: f32,
    y_dir: f32,
}

impl CompassBlend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DirectionController for CompassBlend {
    fn set_movement(&mut self, movement: Vec2) {
        self.x_dir = movement.x;
        self.y_dir = movement.y;
    }

    fn current_clip(&self) -> &str {
        if self.x_dir == 0.0 && self.y_dir == 0.0 {
            return "D";
        }
        let angle = self.y_dir.atan2(self.x_dir);
        let sector = (angle / FRAC_PI_4).round() as i32;
        COMPASS[sector.rem_euclid(8) as usize]
    }
}
