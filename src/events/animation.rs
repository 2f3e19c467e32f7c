//! Animation events and the request observer.
//!
//! Game logic that does not hold a `&mut AnimationPlayer` can still drive a
//! player by triggering an [`AnimationRequestEvent`]; the
//! [`animation_request_observer`] applies it to the target entity.
//!
//! The per-tick systems emit two notifications:
//! - [`AnimationWrappedEvent`] – a player finished a cycle and restarted at
//!   frame 1 (the point where a lock is released)
//! - [`MissingFrameEvent`] – the resolved frame key has no frame in the
//!   player's catalog, a data error in the sprite sheet
use std::sync::Arc;

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::animationplayer::AnimationPlayer;
use crate::components::direction::Direction;
use crate::resources::framecatalog::FrameKey;

/// A change requested for one player.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationRequest {
    /// [`AnimationPlayer::play_animation`]
    Play { name: String, speed: f32 },
    /// [`AnimationPlayer::play_new_animation`]
    PlayNew { name: String, speed: f32 },
    /// [`AnimationPlayer::lock_animation`]
    Lock,
    /// [`AnimationPlayer::set_anim_speed_modifier`]
    SetSpeed(f32),
    /// [`AnimationPlayer::set_direction`]
    Face(Direction),
}

/// Ask the player on `entity` to apply `request`.
#[derive(Event, Debug, Clone)]
pub struct AnimationRequestEvent {
    pub entity: Entity,
    pub request: AnimationRequest,
}

impl AnimationRequestEvent {
    pub fn new(entity: Entity, request: AnimationRequest) -> Self {
        Self { entity, request }
    }
}

/// Emitted when a player wraps from its last frame back to frame 1.
#[derive(Event, Debug, Clone)]
pub struct AnimationWrappedEvent {
    pub entity: Entity,
    pub animation: Arc<str>,
    /// Whether the cycle that just ended was locked.
    pub was_locked: bool,
}

/// Emitted when a player's frame key is not present in its catalog.
#[derive(Event, Debug, Clone)]
pub struct MissingFrameEvent {
    pub entity: Entity,
    pub key: FrameKey,
}

/// Observer applying [`AnimationRequestEvent`]s.
///
/// Unknown animation names are reported by the player and leave it playing
/// what it was playing. Requests for entities without a player are logged and
/// dropped.
pub fn animation_request_observer(
    trigger: On<AnimationRequestEvent>,
    mut players: Query<&mut AnimationPlayer>,
) {
    let event = trigger.event();
    let Ok(mut player) = players.get_mut(event.entity) else {
        warn!(
            "AnimationRequestEvent for {:?} ignored: entity has no AnimationPlayer",
            event.entity
        );
        return;
    };
    let result = match &event.request {
        AnimationRequest::Play { name, speed } => player.play_animation(name, *speed),
        AnimationRequest::PlayNew { name, speed } => player.play_new_animation(name, *speed),
        AnimationRequest::Lock => {
            player.lock_animation();
            Ok(())
        }
        AnimationRequest::SetSpeed(modifier) => {
            player.set_anim_speed_modifier(*modifier);
            Ok(())
        }
        AnimationRequest::Face(direction) => {
            player.set_direction(*direction);
            Ok(())
        }
    };
    // The player already logged the failure; it keeps playing.
    if let Err(e) = result {
        debug!("AnimationRequestEvent for {:?} dropped: {e}", event.entity);
    }
}
