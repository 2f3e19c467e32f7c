//! Frame presentation system.
//!
//! Resolves every player's current [`FrameKey`](crate::resources::framecatalog::FrameKey)
//! against its catalog and passes the frame to the host [`Renderer`]. A key
//! with no frame is a sprite-sheet data error: it is logged and reported with
//! a [`MissingFrameEvent`], and nothing is presented for that entity.
use bevy_ecs::prelude::*;
use log::error;

use crate::components::animationplayer::AnimationPlayer;
use crate::events::animation::MissingFrameEvent;
use crate::resources::rendersink::Renderer;

pub fn render_frames(
    query: Query<(Entity, &AnimationPlayer)>,
    mut renderer: ResMut<Renderer>,
    mut commands: Commands,
) {
    for (entity, player) in query.iter() {
        let key = player.frame_key();
        match player.current_frame_handle() {
            Some(frame) => renderer.0.present(entity, key, frame),
            None => {
                error!("No frame '{key}' in sprite sheet of {entity}");
                commands.trigger(MissingFrameEvent {
                    entity,
                    key: key.clone(),
                });
            }
        }
    }
}
