//! Event types and observers.
//!
//! Events let game logic and hosts talk to animation players without holding
//! component borrows, and let the per-tick systems report what happened.
//!
//! Submodules:
//! - [`animation`] – play/lock/speed requests and wrap/missing-frame notifications
pub mod animation;
