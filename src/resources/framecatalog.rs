//! Frame catalog: named frames grouped into animation clips.
//!
//! A catalog is built once from the flat list of frames a
//! [`FrameSource`](crate::resources::framesource::FrameSource) provides. Every
//! frame name has the form `{animation}-{direction}-{frame}` with a 1-based
//! decimal frame number, e.g. `Walk-DownLeft-3`.
//!
//! Build rules
//! - Frames are visited in ascending `(animation, direction, frame)` order, so
//!   the result does not depend on the order the source listed them in.
//! - The first frame seen for an animation registers a clip with one frame.
//! - Every later frame whose number exceeds the clip's current count grows the
//!   clip by exactly one frame. Sparse numbering (`1, 3`) therefore yields a
//!   count of 2, not 3.
//! - A frame number that is not a decimal integer contributes nothing to the
//!   count and the frame cannot be addressed by key.
//! - A build that leaves no addressable frame fails with [`LoadError::Empty`].
//!
//! After the build the catalog is read-only. Players hold it behind an `Arc`.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::components::direction::Direction;
use crate::error::LoadError;
use crate::resources::animationclip::AnimationClip;
use crate::resources::framesource::{FrameHandle, FrameSource};

/// Separator between the three segments of a frame name.
pub const SEPARATOR: char = '-';
/// Index of the first frame of every animation.
pub const FIRST_FRAME: u32 = 1;

const MEMORY_ORIGIN: &str = "<memory>";

/// Composite lookup key for a single displayable frame.
///
/// Formats as `{animation}-{direction}-{frame}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameKey {
    pub animation: Arc<str>,
    pub direction: Direction,
    pub frame: u32,
}

impl FrameKey {
    pub fn new(animation: impl Into<Arc<str>>, direction: Direction, frame: u32) -> Self {
        Self {
            animation: animation.into(),
            direction,
            frame,
        }
    }

    /// Parse the string form. Returns `None` unless the name has an animation,
    /// a known direction and a decimal frame number.
    pub fn parse(name: &str) -> Option<Self> {
        let (rest, frame) = name.rsplit_once(SEPARATOR)?;
        let (animation, direction) = rest.split_once(SEPARATOR)?;
        if animation.is_empty() {
            return None;
        }
        Some(Self {
            animation: animation.into(),
            direction: direction.parse().ok()?,
            frame: frame.parse().ok()?,
        })
    }
}

impl fmt::Display for FrameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.animation, self.direction, self.frame
        )
    }
}

/// Frames and the animation clips discovered among them.
#[derive(Debug, Clone, Default)]
pub struct FrameCatalog {
    frames: FxHashMap<FrameKey, FrameHandle>,
    animations: FxHashMap<Arc<str>, AnimationClip>,
}

impl FrameCatalog {
    /// Load every frame under `path` from `source` and build the catalog.
    ///
    /// Fails if the source is unavailable or empty, or if `default_animation`
    /// is not one of the animations found.
    pub fn load(
        source: &dyn FrameSource,
        path: &Path,
        default_animation: &str,
    ) -> Result<Self, LoadError> {
        let frames = source.load_frames(path)?;
        let catalog = Self::build(path, frames)?;
        if !catalog.has_animation(default_animation) {
            return Err(LoadError::MissingDefault {
                name: default_animation.to_string(),
            });
        }
        info!(
            "Loaded {} frames in {} animations from {}",
            catalog.len(),
            catalog.animations.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Build a catalog from frames the caller already holds.
    pub fn from_frames<I>(frames: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (String, FrameHandle)>,
    {
        Self::build(Path::new(MEMORY_ORIGIN), frames)
    }

    fn build<I>(origin: &Path, frames: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (String, FrameHandle)>,
    {
        let mut entries: Vec<(String, FrameHandle)> = frames.into_iter().collect();
        entries.sort_by_cached_key(|(name, _)| ordering_key(name));

        let mut catalog = FrameCatalog::default();
        for (name, handle) in entries {
            catalog.insert(name, handle);
        }

        if catalog.frames.is_empty() {
            return Err(LoadError::Empty {
                path: origin.to_path_buf(),
            });
        }
        Ok(catalog)
    }

    fn insert(&mut self, name: String, handle: FrameHandle) {
        let parts: SmallVec<[&str; 4]> = name.split(SEPARATOR).collect();
        if parts.len() < 3 {
            warn!("Skipping frame '{name}': expected animation-direction-frame");
            return;
        }
        let animation = parts[0];
        let number = parts[parts.len() - 1].parse::<u32>().ok();

        let clip_name = match self.animations.get_mut(animation) {
            Some(clip) => {
                if clip.frame_count() < number.unwrap_or(0) {
                    clip.add_frame();
                }
                clip.name_arc().clone()
            }
            None => {
                let clip = AnimationClip::new(animation, FIRST_FRAME);
                let clip_name = clip.name_arc().clone();
                self.animations.insert(clip_name.clone(), clip);
                clip_name
            }
        };

        let direction = parts[1..parts.len() - 1].join("-").parse::<Direction>();
        match (direction, number) {
            (Ok(direction), Some(frame)) if frame >= FIRST_FRAME => {
                self.frames
                    .insert(FrameKey::new(clip_name, direction, frame), handle);
            }
            _ => warn!("Frame '{name}' has no valid direction or frame number and cannot be displayed"),
        }
    }

    pub fn clip(&self, name: &str) -> Option<&AnimationClip> {
        self.animations.get(name)
    }

    pub fn has_animation(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    pub fn frame(&self, key: &FrameKey) -> Option<&FrameHandle> {
        self.frames.get(key)
    }

    /// Animation names in lexical order.
    pub fn animation_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.animations.keys().map(|k| &**k).collect();
        names.sort_unstable();
        names
    }

    pub fn clips(&self) -> impl Iterator<Item = &AnimationClip> {
        self.animations.values()
    }

    /// Number of addressable frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Sort key: animation, direction, then numeric frame (unparsable frames last).
fn ordering_key(name: &str) -> (String, String, u32, String) {
    let parts: SmallVec<[&str; 4]> = name.split(SEPARATOR).collect();
    let animation = parts[0].to_string();
    let (direction, frame) = match parts.len() {
        0 | 1 => (String::new(), u32::MAX),
        n => (
            parts[1..n - 1].join("-"),
            parts[n - 1].parse::<u32>().unwrap_or(u32::MAX),
        ),
    };
    (animation, direction, frame, name.to_string())
}
