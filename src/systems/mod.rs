//! Engine-side systems driving animation players.
//!
//! Submodules overview
//! - [`animation`] – tick every player once per host frame
//! - [`direction`] – resolve movement vectors into facing directions
//! - [`render`] – hand each player's current frame to the host renderer
//! - [`time`] – update the host frame rate resource

pub mod animation;
pub mod direction;
pub mod render;
pub mod time;
