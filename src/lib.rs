//! Sprite-sheet animation player.
//!
//! Groups a flat set of named frames (`{animation}-{direction}-{frame}`) into
//! animation clips and plays them back frame by frame, paced against the
//! host's target frame rate. Built on bevy_ecs: players are components,
//! collaborators (frame rate, renderer, direction source) are resources and
//! components the host provides.

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod setup;
pub mod systems;
