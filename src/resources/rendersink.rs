//! Render sink resource.
//!
//! The player never draws anything itself. Once per tick the
//! [`render_frames`](crate::systems::render::render_frames) system resolves each
//! player's current [`FrameKey`] against its catalog and hands the frame to
//! the [`RenderSink`] stored in the [`Renderer`] resource.

use bevy_ecs::prelude::{Entity, Resource};
use log::info;

use crate::resources::framecatalog::FrameKey;
use crate::resources::framesource::FrameHandle;

/// Render sink collaborator: display `frame` for `entity` this tick.
pub trait RenderSink {
    fn present(&mut self, entity: Entity, key: &FrameKey, frame: &FrameHandle);
}

/// Host renderer registered with the world.
#[derive(Resource)]
pub struct Renderer(pub Box<dyn RenderSink + Send + Sync>);

impl Renderer {
    pub fn new(sink: impl RenderSink + Send + Sync + 'static) -> Self {
        Self(Box::new(sink))
    }
}

/// Headless sink that logs every presented frame at `info` level.
///
/// Only frame changes are logged when `changes_only` is set.
#[derive(Debug, Default)]
pub struct LogRenderSink {
    pub changes_only: bool,
    last: Option<(Entity, FrameKey)>,
}

impl LogRenderSink {
    pub fn changes_only() -> Self {
        Self {
            changes_only: true,
            last: None,
        }
    }
}

impl RenderSink for LogRenderSink {
    fn present(&mut self, entity: Entity, key: &FrameKey, frame: &FrameHandle) {
        let unchanged = self
            .last
            .as_ref()
            .is_some_and(|(e, k)| *e == entity && k == key);
        if self.changes_only && unchanged {
            return;
        }
        match frame.region {
            Some(r) => info!(
                "{entity}: {key} <- {} [{}x{} @ {},{}]",
                frame.texture, r.w, r.h, r.x, r.y
            ),
            None => info!("{entity}: {key} <- {}", frame.texture),
        }
        self.last = Some((entity, key.clone()));
    }
}
