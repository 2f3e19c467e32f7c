//! Sprite-sheet animation player component.
//!
//! An [`AnimationPlayer`] owns the playback state of one animated sprite: the
//! current clip, the 1-based current frame, the facing direction, a lock flag
//! and the [`PlaybackClock`] pacing it. It reads clips from its own
//! [`FrameCatalog`], which is built once and never changes afterwards.
//!
//! # Tick contract
//!
//! The host calls [`AnimationPlayer::tick`] exactly once per rendered frame,
//! after game logic has issued its transitions and before rendering. In the
//! ECS this is the [`animation_player`](crate::systems::animation::animation_player)
//! system. Transitions and direction changes become visible in the exposed
//! [`FrameKey`] on the next tick.
//!
//! # Transitions
//!
//! - [`play_animation`](AnimationPlayer::play_animation) keeps the elapsed
//!   frame unless the new clip is too short for it.
//! - [`play_new_animation`](AnimationPlayer::play_new_animation) restarts from
//!   the first frame unless the clip is already playing.
//! - [`lock_animation`](AnimationPlayer::lock_animation) raises a flag that the
//!   next wrap clears. The player does not enforce it; callers check
//!   [`is_in_animation`](AnimationPlayer::is_in_animation) before interrupting.

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use glam::Vec2;
use log::{debug, error};

use crate::components::direction::Direction;
use crate::components::directionblend::DirectionController;
use crate::components::playbackclock::PlaybackClock;
use crate::error::{InitError, PlaybackError};
use crate::resources::animationclip::AnimationClip;
use crate::resources::framecatalog::{FIRST_FRAME, FrameCatalog, FrameKey};
use crate::resources::framesource::FrameHandle;

/// What a single [`AnimationPlayer::tick`] did to the frame position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// The clock was not due; the frame is unchanged.
    Held,
    /// Moved to the next frame.
    Advanced,
    /// Was on the last frame and restarted at the first; the lock is cleared.
    Wrapped,
}

#[derive(Debug, Clone, Component)]
pub struct AnimationPlayer {
    catalog: Arc<FrameCatalog>,
    current: AnimationClip,
    current_frame: u32,
    direction: Direction,
    is_in_animation: bool,
    clock: PlaybackClock,
    frame_key: FrameKey,
}

impl AnimationPlayer {
    /// Start playing `default_animation` from its first frame, facing
    /// `initial_direction`.
    pub fn initialize(
        catalog: Arc<FrameCatalog>,
        default_animation: &str,
        initial_direction: Direction,
    ) -> Result<Self, InitError> {
        let current = catalog
            .clip(default_animation)
            .cloned()
            .ok_or_else(|| InitError::UnknownDefaultAnimation(default_animation.to_string()))?;
        let frame_key = FrameKey::new(current.name_arc().clone(), initial_direction, FIRST_FRAME);
        debug!("Player initialized on {frame_key}");
        Ok(Self {
            catalog,
            current,
            current_frame: FIRST_FRAME,
            direction: initial_direction,
            is_in_animation: false,
            clock: PlaybackClock::default(),
            frame_key,
        })
    }

    /// Builder-style initial speed modifier. Zero is ignored.
    pub fn with_speed_modifier(mut self, modifier: f32) -> Self {
        self.set_anim_speed_modifier(modifier);
        self
    }

    /// Advance playback by one host frame and refresh the exposed frame key.
    pub fn tick(&mut self, host_fps: u32) -> FrameStep {
        let step = if self.current_frame < self.current.frame_count() {
            if self.clock.should_advance(host_fps) {
                self.current_frame += 1;
                FrameStep::Advanced
            } else {
                FrameStep::Held
            }
        } else {
            self.current_frame = FIRST_FRAME;
            self.is_in_animation = false;
            FrameStep::Wrapped
        };
        self.refresh_frame_key();
        step
    }

    /// Switch to `name`, keeping the elapsed frame when the new clip is long
    /// enough. A clip with `frame_count <= current_frame` restarts at frame 1.
    ///
    /// `speed` is applied through [`set_anim_speed_modifier`](Self::set_anim_speed_modifier),
    /// so `0.0` keeps the current speed.
    pub fn play_animation(&mut self, name: &str, speed: f32) -> Result<(), PlaybackError> {
        let clip = self.lookup(name)?;
        debug!(
            "play_animation: {} -> {} at frame {}",
            self.current.name(),
            clip.name(),
            self.current_frame
        );
        self.current = clip;
        if self.current.frame_count() <= self.current_frame {
            self.current_frame = FIRST_FRAME;
        }
        self.set_anim_speed_modifier(speed);
        Ok(())
    }

    /// Switch to `name` from its first frame. Requesting the clip that is
    /// already playing leaves the frame where it is.
    pub fn play_new_animation(&mut self, name: &str, speed: f32) -> Result<(), PlaybackError> {
        let clip = self.lookup(name)?;
        if clip.name() != self.current.name() {
            debug!("play_new_animation: {} -> {}", self.current.name(), clip.name());
            self.current = clip;
            self.current_frame = FIRST_FRAME;
        }
        self.set_anim_speed_modifier(speed);
        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<AnimationClip, PlaybackError> {
        match self.catalog.clip(name) {
            Some(clip) => Ok(clip.clone()),
            None => {
                error!("{name} is not a valid animation.");
                Err(PlaybackError::UnknownAnimation(name.to_string()))
            }
        }
    }

    /// Mark the current animation as uninterruptible until it wraps.
    pub fn lock_animation(&mut self) {
        self.is_in_animation = true;
    }

    pub fn is_in_animation(&self) -> bool {
        self.is_in_animation
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Face the direction the host's blend resolves `movement` to.
    ///
    /// A zero vector leaves the direction alone, including one set with
    /// [`set_direction`](Self::set_direction). Clip names outside the eight
    /// compass abbreviations are ignored.
    pub fn set_direction_from_movement(
        &mut self,
        movement: Vec2,
        controller: &mut dyn DirectionController,
    ) {
        if movement == Vec2::ZERO || !movement.is_finite() {
            return;
        }
        controller.set_movement(movement);
        if let Some(direction) = Direction::from_compass(controller.current_clip()) {
            self.set_direction(direction);
        }
    }

    /// Change the playback speed. Zero and the current value are ignored.
    pub fn set_anim_speed_modifier(&mut self, modifier: f32) {
        if self.clock.set_speed_modifier(modifier) {
            debug!("Speed modifier for {} set to {modifier}", self.current.name());
        }
    }

    pub fn has_action(&self, name: &str) -> bool {
        self.catalog.has_animation(name)
    }

    pub fn current_clip(&self) -> &AnimationClip {
        &self.current
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed_modifier(&self) -> f32 {
        self.clock.speed_modifier()
    }

    /// Key of the frame to display, as resolved by the last tick.
    pub fn frame_key(&self) -> &FrameKey {
        &self.frame_key
    }

    /// Handle for [`frame_key`](Self::frame_key), if the catalog has it.
    pub fn current_frame_handle(&self) -> Option<&FrameHandle> {
        self.catalog.frame(&self.frame_key)
    }

    pub fn catalog(&self) -> &Arc<FrameCatalog> {
        &self.catalog
    }

    fn refresh_frame_key(&mut self) {
        self.frame_key = FrameKey::new(
            self.current.name_arc().clone(),
            self.direction,
            self.current_frame,
        );
    }
}
