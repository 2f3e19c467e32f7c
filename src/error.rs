//! Error types for catalog loading, player initialization and playback.
//!
//! - [`LoadError`] – the frame source could not produce a usable catalog
//! - [`InitError`] – a player could not be brought up (missing collaborators,
//!   bad catalog, unknown default animation)
//! - [`PlaybackError`] – a recoverable request failure; playback continues
//! - [`ConfigError`] – the INI configuration could not be read or written

use std::path::PathBuf;

use thiserror::Error;

/// Failure while turning a frame source into a [`FrameCatalog`](crate::resources::framecatalog::FrameCatalog).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read at all.
    #[error("frame source '{}' is unavailable: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A sheet manifest was readable but not valid JSON for the expected layout.
    #[error("sheet manifest '{}' is malformed: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// No addressable frame was discovered for any animation.
    #[error("frame source '{}' contains no frames", path.display())]
    Empty { path: PathBuf },
    /// The requested default animation is not among the discovered animations.
    #[error("default animation '{name}' not found in frame source")]
    MissingDefault { name: String },
}

/// Failure while initializing an animation player.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("no render sink registered with the host")]
    MissingRenderSink,
    #[error("no frame rate source registered with the host")]
    MissingFrameRate,
    #[error("default animation '{0}' is not in the catalog")]
    UnknownDefaultAnimation(String),
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Recoverable playback request failure. The current animation keeps playing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("{0} is not a valid animation")]
    UnknownAnimation(String),
}

/// Failure while reading or writing the INI configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config file '{}': {message}", path.display())]
    Read { path: PathBuf, message: String },
    #[error("failed to save config file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value for [{section}] {key}: '{value}'")]
    InvalidValue {
        section: &'static str,
        key: &'static str,
        value: String,
    },
}
