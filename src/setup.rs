//! World setup: spawning players and wiring the per-frame schedule.
//!
//! A host brings the animation player up in three steps:
//!
//! 1. Insert its collaborators as resources: a [`Renderer`] and a
//!    [`FrameRate`].
//! 2. Call [`register_observers`] and build the schedule with
//!    [`animation_schedule`].
//! 3. Spawn each animated sprite with [`spawn_animation_player`], passing the
//!    entity's [`DirectionSource`].
//!
//! Every initialization failure is logged and returned as an [`InitError`];
//! nothing is spawned in that case.

use std::path::Path;
use std::sync::Arc;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{error, info};

use crate::components::animationplayer::AnimationPlayer;
use crate::components::direction::Direction;
use crate::components::directionblend::DirectionSource;
use crate::components::movement::Movement;
use crate::error::InitError;
use crate::events::animation::animation_request_observer;
use crate::resources::framecatalog::FrameCatalog;
use crate::resources::framerate::FrameRate;
use crate::resources::framesource::{DirectoryFrameSource, FrameSource, ManifestFrameSource};
use crate::resources::playerconfig::PlayerConfig;
use crate::resources::rendersink::Renderer;
use crate::systems::animation::animation_player;
use crate::systems::direction::direction_from_movement;
use crate::systems::render::render_frames;

/// Where a player's frames come from and how it starts.
pub struct PlayerSetup<'a> {
    pub source: &'a dyn FrameSource,
    pub path: &'a Path,
    pub default_animation: &'a str,
    pub direction: Direction,
    pub speed_modifier: f32,
}

impl<'a> PlayerSetup<'a> {
    pub fn new(source: &'a dyn FrameSource, path: &'a Path, default_animation: &'a str) -> Self {
        Self {
            source,
            path,
            default_animation,
            direction: Direction::Down,
            speed_modifier: 1.0,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_speed_modifier(mut self, speed_modifier: f32) -> Self {
        self.speed_modifier = speed_modifier;
        self
    }
}

/// Frame source matching the configured sheet kind.
pub fn frame_source_for(config: &PlayerConfig) -> Box<dyn FrameSource> {
    if config.manifest {
        Box::new(ManifestFrameSource)
    } else {
        Box::new(DirectoryFrameSource)
    }
}

/// Load the catalog, initialize a player and spawn it.
///
/// The spawned entity carries the [`AnimationPlayer`], the given
/// [`DirectionSource`] and a zero [`Movement`].
pub fn spawn_animation_player(
    world: &mut World,
    setup: &PlayerSetup<'_>,
    direction_source: DirectionSource,
) -> Result<Entity, InitError> {
    let player = initialize_player(world, setup).inspect_err(|e| {
        error!(
            "Animation player for '{}' not initialized: {e}",
            setup.path.display()
        )
    })?;
    let entity = world
        .spawn((player, direction_source, Movement::default()))
        .id();
    info!(
        "Spawned animation player {entity} playing '{}'",
        setup.default_animation
    );
    Ok(entity)
}

fn initialize_player(world: &World, setup: &PlayerSetup<'_>) -> Result<AnimationPlayer, InitError> {
    if !world.contains_resource::<Renderer>() {
        return Err(InitError::MissingRenderSink);
    }
    if !world.contains_resource::<FrameRate>() {
        return Err(InitError::MissingFrameRate);
    }
    let catalog = FrameCatalog::load(setup.source, setup.path, setup.default_animation)?;
    let player = AnimationPlayer::initialize(
        Arc::new(catalog),
        setup.default_animation,
        setup.direction,
    )?;
    Ok(player.with_speed_modifier(setup.speed_modifier))
}

/// Spawn the observers the animation events need.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(animation_request_observer));
    world.flush();
}

/// Per-frame schedule: direction, then tick, then render.
pub fn animation_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(direction_from_movement);
    update.add_systems(animation_player.after(direction_from_movement));
    update.add_systems(render_frames.after(animation_player));
    update
}
