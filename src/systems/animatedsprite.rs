//! Animated sprite systems.
//!
//! - [`advance_animated_sprites`] moves every sprite's playback cursor by the
//!   frame delta from [`WorldTime`].
//! - [`render_animated_sprites`] draws every sprite entity in [`ZIndex`]
//!   order and reports one-shot completion through
//!   [`AnimationFinishedEvent`].
//!
//! # Frame Flow
//!
//! 1. [`update_world_time`](crate::systems::time::update_world_time) stores the scaled delta
//! 2. A schedule runs [`advance_animated_sprites`]
//! 3. Inside the backend's drawing scope, [`render_animated_sprites`] blits each sprite

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::animatedsprite::AnimatedSprite;
use crate::components::zindex::ZIndex;
use crate::error::SpriteError;
use crate::events::animation::AnimationFinishedEvent;
use crate::resources::worldtime::WorldTime;
use crate::surface::{DrawSurface, ImageProvider};

pub fn advance_animated_sprites(mut query: Query<&mut AnimatedSprite>, time: Res<WorldTime>) {
    for mut sprite in query.iter_mut() {
        sprite.advance(time.delta);
    }
}

/// Draw all sprite entities onto `surface`, back to front.
///
/// A sprite that fails to draw is skipped; the rest still draw. The
/// failures are returned so the caller can decide what to do with them, e.g.
/// pass them to [`despawn_unrenderable`].
/// Sprites without a [`ZIndex`] draw at 0.
pub fn render_animated_sprites<S, P>(
    world: &mut World,
    surface: &mut S,
    images: &P,
) -> Vec<(Entity, SpriteError)>
where
    S: DrawSurface + ?Sized,
    P: ImageProvider<Bitmap = S::Bitmap> + ?Sized,
{
    let mut to_draw: Vec<(ZIndex, Entity)> = {
        let mut q = world.query_filtered::<(Entity, Option<&ZIndex>), With<AnimatedSprite>>();
        q.iter(world)
            .map(|(entity, z)| (z.copied().unwrap_or_default(), entity))
            .collect()
    };
    to_draw.sort_by_key(|(z, _)| *z);

    let mut failures = Vec::new();
    let mut finished = Vec::new();
    for (_z, entity) in to_draw {
        let Some(mut sprite) = world.get_mut::<AnimatedSprite>(entity) else {
            continue;
        };
        let was_finished = sprite.is_finished();
        match sprite.draw(&mut *surface, images) {
            Ok(()) => {
                if !was_finished && sprite.is_finished() {
                    finished.push(AnimationFinishedEvent {
                        entity,
                        image_id: sprite.image_id().to_string(),
                    });
                }
            }
            Err(err) => {
                debug!("Failed to draw sprite {:?}: {}", entity, err);
                failures.push((entity, err));
            }
        }
    }

    for event in finished {
        world.trigger(event);
    }

    failures
}

/// Report each failed sprite once and remove it from the world, so a bad
/// image id does not fail again on every frame.
pub fn despawn_unrenderable(world: &mut World, failures: &[(Entity, SpriteError)]) {
    for (entity, err) in failures {
        warn!("Despawning sprite {:?}: {}", entity, err);
        world.despawn(*entity);
    }
}
