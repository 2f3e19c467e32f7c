//! Animation playback system.
//!
//! [`animation_player`] is the per-frame tick of every
//! [`AnimationPlayer`](crate::components::animationplayer::AnimationPlayer).
//!
//! # Ordering
//!
//! Schedule it after game logic (which issues transitions and movement) and
//! after [`direction_from_movement`](crate::systems::direction::direction_from_movement),
//! and before [`render_frames`](crate::systems::render::render_frames). No
//! other ordering is assumed.
use bevy_ecs::prelude::*;

use crate::components::animationplayer::{AnimationPlayer, FrameStep};
use crate::events::animation::AnimationWrappedEvent;
use crate::resources::framerate::FrameRate;

/// Tick every player once at the host's target frame rate.
///
/// Contract
/// - Reads [`FrameRate`] for the host's target FPS.
/// - Mutates [`AnimationPlayer`] playback state and its exposed frame key.
/// - Triggers [`AnimationWrappedEvent`] for each player that wrapped.
pub fn animation_player(
    mut query: Query<(Entity, &mut AnimationPlayer)>,
    frame_rate: Res<FrameRate>,
    mut commands: Commands,
) {
    for (entity, mut player) in query.iter_mut() {
        let was_locked = player.is_in_animation();
        if player.tick(frame_rate.target_fps) == FrameStep::Wrapped {
            commands.trigger(AnimationWrappedEvent {
                entity,
                animation: player.current_clip().name_arc().clone(),
                was_locked,
            });
        }
    }
}
