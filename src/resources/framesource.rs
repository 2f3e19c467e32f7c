//! Frame sources: where named frames come from.
//!
//! A [`FrameSource`] turns a path into the flat list of `(name, handle)` pairs
//! the [`FrameCatalog`](crate::resources::framecatalog::FrameCatalog) is built
//! from. The handle is opaque to the player; only the host's
//! [`RenderSink`](crate::resources::rendersink::RenderSink) interprets it.
//!
//! Provided sources
//! - [`DirectoryFrameSource`] – one image file per frame, frame name = file stem
//! - [`ManifestFrameSource`] – one texture sliced into named regions, described
//!   by a JSON manifest
//! - [`MemoryFrameSource`] – frames the host already holds
//!
//! # Manifest format
//!
//! ```json
//! {
//!   "texture": "hero.png",
//!   "frames": [
//!     { "name": "Walk-Down-1", "x": 0,  "y": 0, "w": 32, "h": 32 },
//!     { "name": "Walk-Down-2", "x": 32, "y": 0, "w": 32, "h": 32 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Pixel rectangle of a frame inside its texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRegion {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Engine-supplied reference to a displayable image.
///
/// `texture` identifies the image (a file path, an atlas id, ...). When the
/// frame is a slice of a larger sheet, `region` selects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHandle {
    pub texture: Arc<str>,
    pub region: Option<FrameRegion>,
}

impl FrameHandle {
    /// Handle for a frame that is a whole texture.
    pub fn texture(texture: impl Into<Arc<str>>) -> Self {
        Self {
            texture: texture.into(),
            region: None,
        }
    }

    /// Handle for a frame sliced out of a shared texture.
    pub fn region(texture: impl Into<Arc<str>>, region: FrameRegion) -> Self {
        Self {
            texture: texture.into(),
            region: Some(region),
        }
    }
}

/// Asset source collaborator: load all named frames under a path.
pub trait FrameSource {
    fn load_frames(&self, path: &Path) -> Result<Vec<(String, FrameHandle)>, LoadError>;
}

/// Image file extensions recognized by [`DirectoryFrameSource`].
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Every image file directly inside a directory is one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryFrameSource;

impl FrameSource for DirectoryFrameSource {
    fn load_frames(&self, path: &Path) -> Result<Vec<(String, FrameHandle)>, LoadError> {
        let unavailable = |source: std::io::Error| LoadError::Unavailable {
            path: path.to_path_buf(),
            source,
        };
        let mut frames = Vec::new();
        for entry in fs::read_dir(path).map_err(unavailable)? {
            let file = entry.map_err(unavailable)?.path();
            if !file.is_file() || !is_image(&file) {
                continue;
            }
            let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            frames.push((
                stem.to_string(),
                FrameHandle::texture(&*file.to_string_lossy()),
            ));
        }
        Ok(frames)
    }
}

fn is_image(file: &Path) -> bool {
    file.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(e))
        })
}

/// JSON description of a sliced sprite sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetManifest {
    /// Texture the regions are cut from, relative to the manifest file.
    pub texture: String,
    pub frames: Vec<ManifestFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestFrame {
    pub name: String,
    #[serde(flatten)]
    pub region: FrameRegion,
}

/// Reads a [`SheetManifest`] from a JSON file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestFrameSource;

impl ManifestFrameSource {
    pub fn parse(path: &Path) -> Result<SheetManifest, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| LoadError::Manifest {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl FrameSource for ManifestFrameSource {
    fn load_frames(&self, path: &Path) -> Result<Vec<(String, FrameHandle)>, LoadError> {
        let manifest = Self::parse(path)?;
        let texture: PathBuf = match path.parent() {
            Some(dir) => dir.join(&manifest.texture),
            None => PathBuf::from(&manifest.texture),
        };
        let texture: Arc<str> = Arc::from(&*texture.to_string_lossy());
        Ok(manifest
            .frames
            .into_iter()
            .map(|f| (f.name, FrameHandle::region(texture.clone(), f.region)))
            .collect())
    }
}

/// Frames supplied directly by the host. The path is ignored.
#[derive(Debug, Clone, Default)]
pub struct MemoryFrameSource {
    pub frames: Vec<(String, FrameHandle)>,
}

impl MemoryFrameSource {
    /// Frames whose handle is simply their own name.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let frames = names
            .into_iter()
            .map(|n| {
                let name: String = n.into();
                let handle = FrameHandle::texture(name.as_str());
                (name, handle)
            })
            .collect();
        Self { frames }
    }
}

impl FrameSource for MemoryFrameSource {
    fn load_frames(&self, _path: &Path) -> Result<Vec<(String, FrameHandle)>, LoadError> {
        Ok(self.frames.clone())
    }
}
