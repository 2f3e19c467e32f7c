//! Player configuration resource.
//!
//! Holds the frame-source path, default animation and playback settings,
//! loaded from an INI file. Defaults allow a safe startup when the file is
//! missing or incomplete.
//!
//! # Configuration File Format
//!
//! ```ini
//! [sheet]
//! path = assets/sprites/hero
//! manifest = false
//! default_animation = Idle
//! direction = Down
//!
//! [playback]
//! target_fps = 60
//! speed_modifier = 1
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::direction::Direction;
use crate::error::ConfigError;
use crate::resources::framerate::DEFAULT_TARGET_FPS;

const DEFAULT_SHEET_PATH: &str = "./assets/sprites";
const DEFAULT_ANIMATION: &str = "Idle";
const DEFAULT_SPEED_MODIFIER: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    /// Directory of frame images, or a sheet manifest when `manifest` is set.
    pub sheet_path: PathBuf,
    /// Treat `sheet_path` as a JSON sheet manifest.
    pub manifest: bool,
    /// Animation played right after initialization.
    pub default_animation: String,
    pub initial_direction: Direction,
    pub target_fps: u32,
    /// Initial speed modifier; zero is treated as 1.
    pub speed_modifier: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerConfig {
    pub fn new() -> Self {
        Self {
            sheet_path: PathBuf::from(DEFAULT_SHEET_PATH),
            manifest: false,
            default_animation: DEFAULT_ANIMATION.to_string(),
            initial_direction: Direction::Down,
            target_fps: DEFAULT_TARGET_FPS,
            speed_modifier: DEFAULT_SPEED_MODIFIER,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new_cs();
        config
            .load(&self.config_path)
            .map_err(|message| ConfigError::Read {
                path: self.config_path.clone(),
                message,
            })?;
        self.apply(&config)?;

        info!(
            "Loaded config: sheet={} (manifest={}), default={}, direction={}, fps={}, speed={}",
            self.sheet_path.display(),
            self.manifest,
            self.default_animation,
            self.initial_direction,
            self.target_fps,
            self.speed_modifier
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new_cs();
        config.read(text.to_string()).map_err(|message| ConfigError::Read {
            path: self.config_path.clone(),
            message,
        })?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), ConfigError> {
        // [sheet] section
        if let Some(path) = config.get("sheet", "path") {
            self.sheet_path = PathBuf::from(path);
        }
        if let Some(manifest) = config.getbool("sheet", "manifest").ok().flatten() {
            self.manifest = manifest;
        }
        if let Some(name) = config.get("sheet", "default_animation") {
            self.default_animation = name;
        }
        if let Some(direction) = config.get("sheet", "direction") {
            self.initial_direction =
                direction
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        section: "sheet",
                        key: "direction",
                        value: direction.clone(),
                    })?;
        }

        // [playback] section
        if let Some(fps) = config.getuint("playback", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(speed) = config.getfloat("playback", "speed_modifier").ok().flatten() {
            self.speed_modifier = speed as f32;
        }
        Ok(())
    }

    /// Save configuration to the INI file.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new_cs();

        // [sheet] section
        config.set(
            "sheet",
            "path",
            Some(self.sheet_path.to_string_lossy().into_owned()),
        );
        config.set("sheet", "manifest", Some(self.manifest.to_string()));
        config.set(
            "sheet",
            "default_animation",
            Some(self.default_animation.clone()),
        );
        config.set(
            "sheet",
            "direction",
            Some(self.initial_direction.to_string()),
        );

        // [playback] section
        config.set("playback", "target_fps", Some(self.target_fps.to_string()));
        config.set(
            "playback",
            "speed_modifier",
            Some(self.speed_modifier.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|source| ConfigError::Write {
                path: self.config_path.clone(),
                source,
            })?;

        info!("Saved config to {:?}", self.config_path);
        Ok(())
    }
}
