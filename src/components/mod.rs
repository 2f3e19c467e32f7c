//! ECS components for animated sprites.
//!
//! Submodules overview:
//! - [`animationplayer`] – playback state machine: clip, frame, direction, lock
//! - [`direction`] – the eight facing directions embedded in frame keys
//! - [`directionblend`] – direction source trait and a compass blend
//! - [`movement`] – per-frame movement intent feeding the direction source
//! - [`playbackclock`] – frame-rate-relative advance cadence

pub mod animationplayer;
pub mod direction;
pub mod directionblend;
pub mod movement;
pub mod playbackclock;
