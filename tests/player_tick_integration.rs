//! Player tick integration tests: schedule ordering, events and rendering.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;

use sheetplayer::components::animationplayer::AnimationPlayer;
use sheetplayer::components::direction::Direction;
use sheetplayer::components::directionblend::{CompassBlend, DirectionSource};
use sheetplayer::components::movement::Movement;
use sheetplayer::error::{InitError, LoadError};
use sheetplayer::events::animation::{
    AnimationRequest, AnimationRequestEvent, AnimationWrappedEvent, MissingFrameEvent,
};
use sheetplayer::resources::framecatalog::FrameKey;
use sheetplayer::resources::framerate::FrameRate;
use sheetplayer::resources::framesource::{FrameHandle, MemoryFrameSource};
use sheetplayer::resources::rendersink::{RenderSink, Renderer};
use sheetplayer::setup::{
    PlayerSetup, animation_schedule, register_observers, spawn_animation_player,
};
use sheetplayer::systems::time::update_frame_rate;

type Presented = Arc<Mutex<Vec<(Entity, String)>>>;

struct RecordingSink(Presented);

impl RenderSink for RecordingSink {
    fn present(&mut self, entity: Entity, key: &FrameKey, _frame: &FrameHandle) {
        self.0.lock().unwrap().push((entity, key.to_string()));
    }
}

#[derive(Resource, Default)]
struct Wraps(Vec<(Entity, String, bool)>);

#[derive(Resource, Default)]
struct Missing(Vec<String>);

fn record_wraps(trigger: On<AnimationWrappedEvent>, mut wraps: ResMut<Wraps>) {
    let e = trigger.event();
    wraps.0.push((e.entity, e.animation.to_string(), e.was_locked));
}

fn record_missing(trigger: On<MissingFrameEvent>, mut missing: ResMut<Missing>) {
    missing.0.push(trigger.event().key.to_string());
}

fn all_directions(name: &str, count: u32) -> Vec<String> {
    let mut names = Vec::new();
    for dir in Direction::ALL {
        for n in 1..=count {
            names.push(format!("{name}-{dir}-{n}"));
        }
    }
    names
}

fn hero_source() -> MemoryFrameSource {
    let mut names = all_directions("Idle", 2);
    names.extend(all_directions("Walk", 3));
    names.extend(all_directions("Attack", 4));
    MemoryFrameSource::from_names(names)
}

fn make_world(fps: u32) -> (World, Presented) {
    let presented: Presented = Arc::default();
    let mut world = World::new();
    world.insert_resource(FrameRate::with_target_fps(fps));
    world.insert_resource(Renderer::new(RecordingSink(presented.clone())));
    world.init_resource::<Wraps>();
    world.init_resource::<Missing>();
    register_observers(&mut world);
    world.spawn(Observer::new(record_wraps));
    world.spawn(Observer::new(record_missing));
    world.flush();
    (world, presented)
}

fn spawn(world: &mut World, source: &MemoryFrameSource, default: &str) -> Entity {
    let setup = PlayerSetup::new(source, std::path::Path::new("hero"), default);
    spawn_animation_player(world, &setup, DirectionSource::new(CompassBlend::new())).unwrap()
}

fn run_ticks(world: &mut World, schedule: &mut Schedule, fps: u32, ticks: u32) {
    for _ in 0..ticks {
        update_frame_rate(world, fps);
        schedule.run(world);
    }
}

fn last_presented(presented: &Presented) -> String {
    presented.lock().unwrap().last().unwrap().1.clone()
}

#[test]
fn spawned_player_starts_on_first_frame() {
    let (mut world, _) = make_world(60);
    let source = MemoryFrameSource::from_names(["Walk-Down-1", "Walk-Down-2", "Walk-Down-3"]);
    let entity = spawn(&mut world, &source, "Walk");

    let player = world.get::<AnimationPlayer>(entity).unwrap();
    assert_eq!(player.current_clip().frame_count(), 3);
    assert_eq!(player.frame_key().to_string(), "Walk-Down-1");
    assert!(world.get::<Movement>(entity).is_some());
}

#[test]
fn schedule_presents_every_tick_and_advances_at_cadence() {
    let (mut world, presented) = make_world(4);
    let source = hero_source();
    let entity = spawn(&mut world, &source, "Walk");
    let mut schedule = animation_schedule();

    run_ticks(&mut world, &mut schedule, 4, 4);
    let frames: Vec<String> = presented
        .lock()
        .unwrap()
        .iter()
        .map(|(e, k)| {
            assert_eq!(*e, entity);
            k.clone()
        })
        .collect();
    assert_eq!(
        frames,
        vec!["Walk-Down-1", "Walk-Down-1", "Walk-Down-1", "Walk-Down-2"]
    );
}

#[test]
fn wrap_event_reports_lock_release() {
    let (mut world, _) = make_world(1);
    let source = hero_source();
    let entity = spawn(&mut world, &source, "Attack");
    world.trigger(AnimationRequestEvent::new(entity, AnimationRequest::Lock));
    assert!(world.get::<AnimationPlayer>(entity).unwrap().is_in_animation());

    let mut schedule = animation_schedule();
    // fps 1 -> one frame per tick: frames 2, 3, 4, then wrap.
    run_ticks(&mut world, &mut schedule, 1, 3);
    assert!(world.resource::<Wraps>().0.is_empty());
    assert!(world.get::<AnimationPlayer>(entity).unwrap().is_in_animation());

    run_ticks(&mut world, &mut schedule, 1, 1);
    let wraps = &world.resource::<Wraps>().0;
    assert_eq!(wraps.len(), 1);
    assert_eq!(wraps[0], (entity, "Attack".to_string(), true));
    assert!(!world.get::<AnimationPlayer>(entity).unwrap().is_in_animation());
}

#[test]
fn requests_drive_transitions() {
    let (mut world, presented) = make_world(1);
    let source = hero_source();
    let entity = spawn(&mut world, &source, "Idle");
    let mut schedule = animation_schedule();

    world.trigger(AnimationRequestEvent::new(
        entity,
        AnimationRequest::PlayNew {
            name: "Attack".to_string(),
            speed: 0.0,
        },
    ));
    world.trigger(AnimationRequestEvent::new(
        entity,
        AnimationRequest::Face(Direction::Left),
    ));
    run_ticks(&mut world, &mut schedule, 1, 2);
    assert_eq!(last_presented(&presented), "Attack-Left-3");

    // Walk has only three frames, so Play restarts it.
    world.trigger(AnimationRequestEvent::new(
        entity,
        AnimationRequest::Play {
            name: "Walk".to_string(),
            speed: 0.0,
        },
    ));
    let player = world.get::<AnimationPlayer>(entity).unwrap();
    assert_eq!(player.current_clip().name(), "Walk");
    assert_eq!(player.current_frame(), 1);
}

#[test]
fn unknown_animation_request_keeps_playing() {
    let (mut world, presented) = make_world(2);
    let source = hero_source();
    let entity = spawn(&mut world, &source, "Walk");
    let mut schedule = animation_schedule();
    run_ticks(&mut world, &mut schedule, 2, 2);
    assert_eq!(last_presented(&presented), "Walk-Down-2");

    world.trigger(AnimationRequestEvent::new(
        entity,
        AnimationRequest::Play {
            name: "Missing".to_string(),
            speed: 3.0,
        },
    ));
    let player = world.get::<AnimationPlayer>(entity).unwrap();
    assert_eq!(player.current_clip().name(), "Walk");
    assert_eq!(player.current_frame(), 2);
    assert_eq!(player.speed_modifier(), 1.0);
}

#[test]
fn set_speed_request_slows_playback() {
    let (mut world, _) = make_world(2);
    let source = hero_source();
    let entity = spawn(&mut world, &source, "Walk");
    world.trigger(AnimationRequestEvent::new(
        entity,
        AnimationRequest::SetSpeed(-2.0),
    ));
    let mut schedule = animation_schedule();

    // threshold = round(2 * 2) = 4
    run_ticks(&mut world, &mut schedule, 2, 3);
    assert_eq!(world.get::<AnimationPlayer>(entity).unwrap().current_frame(), 1);
    run_ticks(&mut world, &mut schedule, 2, 1);
    assert_eq!(world.get::<AnimationPlayer>(entity).unwrap().current_frame(), 2);
}

#[test]
fn movement_turns_player_before_tick() {
    let (mut world, presented) = make_world(60);
    let source = hero_source();
    let entity = spawn(&mut world, &source, "Walk");
    world.entity_mut(entity).insert(Movement::new(-1.0, 1.0));
    let mut schedule = animation_schedule();

    run_ticks(&mut world, &mut schedule, 60, 1);
    assert_eq!(last_presented(&presented), "Walk-UpLeft-1");

    // Stopping keeps the last facing.
    world.entity_mut(entity).insert(Movement::default());
    run_ticks(&mut world, &mut schedule, 60, 1);
    assert_eq!(
        world.get::<AnimationPlayer>(entity).unwrap().direction(),
        Direction::UpLeft
    );
}

#[test]
fn idle_player_keeps_initial_and_requested_direction() {
    let (mut world, presented) = make_world(60);
    let source = hero_source();
    let setup = PlayerSetup::new(&source, std::path::Path::new("hero"), "Walk")
        .with_direction(Direction::Up);
    let entity =
        spawn_animation_player(&mut world, &setup, DirectionSource::new(CompassBlend::new()))
            .unwrap();
    let mut schedule = animation_schedule();

    run_ticks(&mut world, &mut schedule, 60, 1);
    assert_eq!(
        world.get::<AnimationPlayer>(entity).unwrap().direction(),
        Direction::Up
    );
    assert_eq!(last_presented(&presented), "Walk-Up-1");

    world.trigger(AnimationRequestEvent::new(
        entity,
        AnimationRequest::Face(Direction::DownRight),
    ));
    run_ticks(&mut world, &mut schedule, 60, 3);
    assert_eq!(last_presented(&presented), "Walk-DownRight-1");
}

#[test]
fn missing_frame_is_reported_not_presented() {
    let (mut world, presented) = make_world(60);
    // Only the Down direction exists.
    let source = MemoryFrameSource::from_names(["Walk-Down-1", "Walk-Down-2"]);
    let entity = spawn(&mut world, &source, "Walk");
    world.trigger(AnimationRequestEvent::new(
        entity,
        AnimationRequest::Face(Direction::Right),
    ));
    let mut schedule = animation_schedule();
    run_ticks(&mut world, &mut schedule, 60, 1);

    assert!(presented.lock().unwrap().is_empty());
    assert_eq!(world.resource::<Missing>().0, vec!["Walk-Right-1".to_string()]);
}

#[test]
fn request_for_entity_without_player_is_ignored() {
    let (mut world, _) = make_world(60);
    let stranger = world.spawn_empty().id();
    world.trigger(AnimationRequestEvent::new(stranger, AnimationRequest::Lock));
    assert!(world.get::<AnimationPlayer>(stranger).is_none());
}

#[test]
fn players_tick_independently() {
    let (mut world, _) = make_world(2);
    let source = hero_source();
    let fast = spawn(&mut world, &source, "Walk");
    let slow = spawn(&mut world, &source, "Walk");
    world.trigger(AnimationRequestEvent::new(fast, AnimationRequest::SetSpeed(2.0)));
    let mut schedule = animation_schedule();

    run_ticks(&mut world, &mut schedule, 2, 2);
    assert_eq!(world.get::<AnimationPlayer>(fast).unwrap().current_frame(), 3);
    assert_eq!(world.get::<AnimationPlayer>(slow).unwrap().current_frame(), 2);
}

#[test]
fn init_fails_without_render_sink() {
    let mut world = World::new();
    world.insert_resource(FrameRate::default());
    let source = hero_source();
    let setup = PlayerSetup::new(&source, std::path::Path::new("hero"), "Walk");
    let err = spawn_animation_player(&mut world, &setup, DirectionSource::new(CompassBlend::new()))
        .unwrap_err();
    assert!(matches!(err, InitError::MissingRenderSink));
}

#[test]
fn init_fails_without_frame_rate() {
    let mut world = World::new();
    world.insert_resource(Renderer::new(RecordingSink(Arc::default())));
    let source = hero_source();
    let setup = PlayerSetup::new(&source, std::path::Path::new("hero"), "Walk");
    let err = spawn_animation_player(&mut world, &setup, DirectionSource::new(CompassBlend::new()))
        .unwrap_err();
    assert!(matches!(err, InitError::MissingFrameRate));
}

#[test]
fn init_fails_on_empty_source() {
    let (mut world, _) = make_world(60);
    let source = MemoryFrameSource::default();
    let setup = PlayerSetup::new(&source, std::path::Path::new("hero"), "Walk");
    let err = spawn_animation_player(&mut world, &setup, DirectionSource::new(CompassBlend::new()))
        .unwrap_err();
    assert!(matches!(err, InitError::Load(LoadError::Empty { .. })));
}

#[test]
fn init_fails_on_missing_default() {
    let (mut world, _) = make_world(60);
    let source = hero_source();
    let setup = PlayerSetup::new(&source, std::path::Path::new("hero"), "Swim");
    let err = spawn_animation_player(&mut world, &setup, DirectionSource::new(CompassBlend::new()))
        .unwrap_err();
    assert!(matches!(
        err,
        InitError::Load(LoadError::MissingDefault { name }) if name == "Swim"
    ));
    let mut players = world.query::<&AnimationPlayer>();
    assert_eq!(players.iter(&world).count(), 0);
}
