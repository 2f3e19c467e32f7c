//! Movement-to-direction system.
//!
//! Feeds each entity's [`Movement`] through its [`DirectionSource`] and points
//! the [`AnimationPlayer`] at the resolved compass direction. Entities standing
//! still keep whatever direction they were given.
use bevy_ecs::prelude::*;

use crate::components::animationplayer::AnimationPlayer;
use crate::components::directionblend::DirectionSource;
use crate::components::movement::Movement;

pub fn direction_from_movement(
    mut query: Query<(&mut AnimationPlayer, &mut DirectionSource, &Movement)>,
) {
    for (mut player, mut source, movement) in query.iter_mut() {
        player.set_direction_from_movement(movement.velocity, &mut *source.0);
    }
}
