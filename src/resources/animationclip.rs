//! Named animation clip.
//!
//! A clip is the unit of playback: every frame named `{name}-{direction}-{n}`
//! belongs to the clip `name`, and the clip records how many frames it has.

use std::sync::Arc;

/// One named animation and its frame count.
///
/// Read-only outside the crate. The catalog builder is the only writer and it
/// only ever grows the frame count while the catalog is being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationClip {
    name: Arc<str>,
    frame_count: u32,
}

impl AnimationClip {
    pub(crate) fn new(name: impl Into<Arc<str>>, frame_count: u32) -> Self {
        Self {
            name: name.into(),
            frame_count: frame_count.max(1),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the name, cheap to clone into frame keys.
    pub fn name_arc(&self) -> &Arc<str> {
        &self.name
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub(crate) fn add_frame(&mut self) {
        self.frame_count += 1;
    }
}
