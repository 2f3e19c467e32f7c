//! Headless sprite-sheet player.
//!
//! Loads a sprite sheet (a directory of frame images or a JSON sheet
//! manifest), spawns one animation player in a bevy_ecs world and runs the
//! per-frame schedule for a number of ticks, logging each displayed frame.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --frames assets/sprites/hero --default Walk --ticks 240
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};

use sheetplayer::components::direction::Direction;
use sheetplayer::components::directionblend::{CompassBlend, DirectionSource};
use sheetplayer::components::movement::Movement;
use sheetplayer::events::animation::{AnimationRequest, AnimationRequestEvent};
use sheetplayer::resources::framerate::FrameRate;
use sheetplayer::resources::playerconfig::PlayerConfig;
use sheetplayer::resources::rendersink::{LogRenderSink, Renderer};
use sheetplayer::setup::{
    PlayerSetup, animation_schedule, frame_source_for, register_observers,
    spawn_animation_player,
};
use sheetplayer::systems::time::update_frame_rate;

/// Sprite-sheet animation player
#[derive(Parser)]
#[command(version, about = "Plays sprite-sheet animations headlessly and logs each frame.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Frame source path, overriding [sheet] path.
    #[arg(long, value_name = "PATH")]
    frames: Option<PathBuf>,

    /// Treat the frame source as a JSON sheet manifest.
    #[arg(long)]
    manifest: bool,

    /// Default animation, overriding [sheet] default_animation.
    #[arg(long = "default", value_name = "NAME")]
    default_animation: Option<String>,

    /// Initial direction (Down, DownLeft, ..., UpRight).
    #[arg(long, value_name = "DIRECTION")]
    direction: Option<Direction>,

    /// Host target frames per second.
    #[arg(long, value_name = "N")]
    fps: Option<u32>,

    /// Speed modifier: >0 speeds up, <0 slows down.
    #[arg(long, value_name = "M", allow_negative_numbers = true)]
    speed: Option<f32>,

    /// Number of host frames to run.
    #[arg(long, value_name = "N", default_value_t = 120)]
    ticks: u64,

    /// Switch to this animation after initialization.
    #[arg(long, value_name = "NAME")]
    play: Option<String>,

    /// Lock the animation for one cycle.
    #[arg(long)]
    lock: bool,

    /// Constant movement vector fed through the compass blend.
    #[arg(long = "move", num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    movement: Option<Vec<f32>>,

    /// Log every presented frame, not just frame changes.
    #[arg(long)]
    every_tick: bool,
}

impl Cli {
    fn apply(&self, config: &mut PlayerConfig) {
        if let Some(path) = &self.frames {
            config.sheet_path = path.clone();
        }
        if self.manifest {
            config.manifest = true;
        }
        if let Some(name) = &self.default_animation {
            config.default_animation = name.clone();
        }
        if let Some(direction) = self.direction {
            config.initial_direction = direction;
        }
        if let Some(fps) = self.fps {
            config.target_fps = fps;
        }
        if let Some(speed) = self.speed {
            config.speed_modifier = speed;
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = PlayerConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{e}; using defaults");
    }
    cli.apply(&mut config);

    let mut world = World::new();
    world.insert_resource(FrameRate::with_target_fps(config.target_fps));
    let sink = if cli.every_tick {
        LogRenderSink::default()
    } else {
        LogRenderSink::changes_only()
    };
    world.insert_resource(Renderer::new(sink));
    register_observers(&mut world);

    let source = frame_source_for(&config);
    let setup = PlayerSetup::new(
        source.as_ref(),
        &config.sheet_path,
        &config.default_animation,
    )
    .with_direction(config.initial_direction)
    .with_speed_modifier(config.speed_modifier);

    let direction_source = DirectionSource::new(CompassBlend::new());
    let entity = match spawn_animation_player(&mut world, &setup, direction_source) {
        Ok(entity) => entity,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Some(&[x, y]) = cli.movement.as_deref() {
        world.entity_mut(entity).insert(Movement::new(x, y));
    }
    if let Some(name) = &cli.play {
        world.trigger(AnimationRequestEvent::new(
            entity,
            AnimationRequest::PlayNew {
                name: name.clone(),
                speed: 0.0,
            },
        ));
    }
    if cli.lock {
        world.trigger(AnimationRequestEvent::new(entity, AnimationRequest::Lock));
    }
    world.insert_resource(config);

    let mut update = animation_schedule();
    for _ in 0..cli.ticks {
        let fps = world.resource::<PlayerConfig>().target_fps;
        update_frame_rate(&mut world, fps);
        update.run(&mut world);
        world.clear_trackers();
    }

    info!(
        "Ran {} frames",
        world.resource::<FrameRate>().frame_count
    );
}
